//! Deletion of immediate directory entries.
//!
//! Both helpers operate on a directory's direct children only. They never
//! recurse and never touch subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::suffix::is_dev_config;

/// Delete every non-directory entry directly inside `dir`.
///
/// Returns the removed paths. A missing or unreadable directory is an error;
/// an empty directory is a successful no-op.
pub fn clear_files(dir: &Path) -> Result<Vec<PathBuf>> {
    remove_matching(dir, |_| true)
}

/// Delete immediate non-directory entries of `dir` whose names end with `suffix`.
pub fn remove_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    remove_matching(dir, |name| is_dev_config(name, suffix))
}

fn remove_matching(dir: &Path, matches: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("list directory {}", dir.display()))?;

    let mut removed = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if file_type.is_dir() {
            continue;
        }
        if !matches(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        debug!(path = %path.display(), "removed file");
        removed.push(path);
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("write file");
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn clear_removes_files_but_keeps_subdirectories() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("a.txt"));
        touch(&temp.path().join("b.dll"));
        fs::create_dir(temp.path().join("sub")).expect("mkdir");
        touch(&temp.path().join("sub").join("nested.txt"));

        let removed = clear_files(temp.path()).expect("clear");

        assert_eq!(removed.len(), 2);
        assert_eq!(names(temp.path()), vec!["sub"]);
        assert!(temp.path().join("sub").join("nested.txt").is_file());
    }

    #[test]
    fn clear_empty_directory_is_a_noop_twice() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(clear_files(temp.path()).expect("clear").is_empty());
        assert!(clear_files(temp.path()).expect("clear again").is_empty());
    }

    #[test]
    fn clear_missing_directory_fails_with_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("missing");
        let err = clear_files(&missing).expect_err("should fail");
        assert!(format!("{err:#}").contains("missing"));
    }

    #[test]
    fn suffix_removal_only_touches_matching_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("app.dll"));
        touch(&temp.path().join("app.dev.json"));
        touch(&temp.path().join("app.deps.json"));

        let removed = remove_files_with_suffix(temp.path(), ".dev.json").expect("remove");

        assert_eq!(removed.len(), 1);
        assert_eq!(names(temp.path()), vec!["app.deps.json", "app.dll"]);
    }

    #[test]
    fn suffix_removal_skips_matching_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("weird.dev.json")).expect("mkdir");

        let removed = remove_files_with_suffix(temp.path(), ".dev.json").expect("remove");

        assert!(removed.is_empty());
        assert!(temp.path().join("weird.dev.json").is_dir());
    }
}
