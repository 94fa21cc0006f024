use crate::app::config::build_dir_ignore_set;
use crate::app::models::{BundleConfig, FileEntry, ScanOutcome};
use anyhow::{Context, Result};
use globset::GlobSet;
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct Scanner<'a> {
    root: PathBuf,
    config: &'a BundleConfig,
    ignored_dirs: GlobSet,
}

impl<'a> Scanner<'a> {
    /// Fails if the root itself cannot be listed.
    pub fn new(root: PathBuf, config: &'a BundleConfig) -> Result<Self> {
        fs::read_dir(&root).with_context(|| format!("Failed to list {}", root.display()))?;

        Ok(Self {
            root,
            config,
            ignored_dirs: build_dir_ignore_set(config)?,
        })
    }

    /// Pre-order walk. Ignored directories are pruned before descent, and each
    /// directory yields its files (by name) before its subdirectories (by name).
    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        // Plain walk: no .gitignore, no hidden-file rules, links not followed.
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path({
                let kinds = DirKinds::default();
                move |a, b| kinds.files_first(a, b)
            });

        let ignored = self.ignored_dirs.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
            if is_dir && ignored.is_match(entry.file_name()) {
                log::debug!("Pruning {}", entry.path().display());
                return false;
            }
            true
        });

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if let Some(selected) = self.process_entry(&entry) {
                        outcome.entries.push(selected);
                    }
                }
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {}", err);
                    outcome.walk_errors += 1;
                }
            }
        }

        outcome
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<FileEntry> {
        if entry.depth() == 0 || entry.file_type().map_or(true, |ft| ft.is_dir()) {
            return None;
        }

        let path = entry.path();
        // Symlinked directories are listed but never descended or read.
        if path.is_dir() {
            return None;
        }
        if !self.config.selects(path) {
            return None;
        }

        let relative = diff_paths(path, &self.root)?;
        let relative_path = display_relative(&relative);
        log::trace!("Selected {}", relative_path);

        Some(FileEntry {
            path: path.to_path_buf(),
            relative_path,
        })
    }
}

/// Remembers which paths are directories so sorting a listing stats each
/// entry once.
#[derive(Default)]
struct DirKinds {
    seen: Mutex<HashMap<PathBuf, bool>>,
}

impl DirKinds {
    fn is_dir(&self, path: &Path) -> bool {
        match self.seen.lock() {
            Ok(mut seen) => *seen
                .entry(path.to_path_buf())
                .or_insert_with(|| path.is_dir()),
            Err(_) => path.is_dir(),
        }
    }

    /// Files before directories, then by name.
    fn files_first(&self, a: &Path, b: &Path) -> Ordering {
        (self.is_dir(a), a.file_name()).cmp(&(self.is_dir(b), b.file_name()))
    }
}

/// Renders a root-relative path the way the header shows it: `./src/main.cpp`.
fn display_relative(relative: &Path) -> String {
    Path::new(".").join(relative).to_string_lossy().to_string()
}
