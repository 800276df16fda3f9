use crate::error::Error;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Immediate children of `dir`, in listing order unless `sort` is set.
///
/// Entries are not followed; callers apply the link-following type checks
/// (`Path::is_dir`, `Path::is_file`) themselves.
fn immediate_children(dir: &Path, sort: bool) -> Result<Vec<PathBuf>, Error> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if sort {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .map(|entry| entry.map(DirEntry::into_path).map_err(Error::from))
        .collect()
}

pub fn list_subdirectories(root: &Path, sort: bool) -> Result<Vec<PathBuf>, Error> {
    Ok(immediate_children(root, sort)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

/// Plain files directly inside `dir`. Nested directories and anything else
/// that is not a file are left out.
pub fn list_files(dir: &Path, sort: bool) -> Result<Vec<PathBuf>, Error> {
    Ok(immediate_children(dir, sort)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_subdirectories_exclude_files() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("loose.txt"), "x").unwrap();

        let dirs = list_subdirectories(tmp.path(), true).unwrap();
        assert_eq!(dirs, vec![tmp.path().join("a"), tmp.path().join("b")]);
    }

    #[test]
    fn test_files_exclude_nested_directories() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("z.txt"), "z").unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();

        let files = list_files(tmp.path(), true).unwrap();
        assert_eq!(files, vec![tmp.path().join("a.txt"), tmp.path().join("z.txt")]);
    }

    #[test]
    fn test_unsorted_listing_keeps_every_entry() {
        let tmp = tempdir().unwrap();
        for name in ["one", "two", "three"] {
            fs::write(tmp.path().join(name), name).unwrap();
        }

        let mut files = list_files(tmp.path(), false).unwrap();
        files.sort();
        assert_eq!(files.len(), 3);
        assert!(files.contains(&tmp.path().join("two")));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempdir().unwrap();
        let result = list_files(&tmp.path().join("missing"), false);
        assert!(matches!(result, Err(Error::Walk(_))));
    }
}
