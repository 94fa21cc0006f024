use crate::app::models::BundleConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions and exact file names that end up in the bundle.
pub const ALLOWED_SUFFIXES: &[&str] = &[".h", ".cpp", ".ui", ".pro", ".pri", "CMakeLists.txt"];

/// Directories that are never descended into.
pub const IGNORED_DIR_NAMES: &[&str] = &["build", "release", "debug", ".git", ".vs", "Resource"];

/// Shadow build directories (`build-Desktop_Qt_6-Debug`, ...).
pub const IGNORED_DIR_PREFIX: &str = "build-";

pub const OUTPUT_FILE_NAME: &str = "full_project_code.txt";

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            allowed_suffixes: ALLOWED_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            ignored_dir_names: IGNORED_DIR_NAMES.iter().map(|s| s.to_string()).collect(),
            ignored_dir_prefix: IGNORED_DIR_PREFIX.to_string(),
            output_file: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

impl BundleConfig {
    /// True if the file's extension matches a dotted entry (`.cpp`) or its
    /// whole name matches an undotted one (`CMakeLists.txt`).
    pub fn selects(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let extension = path.extension();

        self.allowed_suffixes
            .iter()
            .any(|suffix| match suffix.strip_prefix('.') {
                Some(bare) => extension == Some(OsStr::new(bare)),
                None => name == OsStr::new(suffix),
            })
    }
}

/// The configuration is fixed; there is nothing to merge it with.
pub fn resolve_config() -> BundleConfig {
    BundleConfig::default()
}

/// Compiles the ignored names and prefix into one set matched against a
/// directory's own name.
pub fn build_dir_ignore_set(config: &BundleConfig) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in &config.ignored_dir_names {
        builder.add(
            Glob::new(&globset::escape(name))
                .context(format!("Invalid ignored directory name: {}", name))?,
        );
    }
    if !config.ignored_dir_prefix.is_empty() {
        let pattern = format!("{}*", globset::escape(&config.ignored_dir_prefix));
        builder.add(
            Glob::new(&pattern)
                .context(format!("Invalid ignored directory prefix: {}", pattern))?,
        );
    }
    Ok(builder.build()?)
}
