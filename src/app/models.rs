use std::path::PathBuf;

/// The fixed selection rules for a run, built once by `resolve_config`.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Dotted extensions (`.cpp`) or exact file names (`CMakeLists.txt`).
    pub allowed_suffixes: Vec<String>,
    pub ignored_dir_names: Vec<String>,
    pub ignored_dir_prefix: String,
    /// Relative to the working directory, not the traversal root.
    pub output_file: PathBuf,
}

/// A file selected for the bundle.
#[derive(Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Root-relative path as written in the header, e.g. `./src/main.cpp`.
    pub relative_path: String,
}

/// Selected files in traversal order, plus directories that could not be listed.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub entries: Vec<FileEntry>,
    pub walk_errors: usize,
}

/// Counters collected over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BundleReport {
    pub files_written: usize,
    pub read_errors: usize,
    pub walk_errors: usize,
}
