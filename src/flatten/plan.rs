use super::listing;
use crate::error::Error;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What currently occupies a planned target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Vacant,
    File,
    Directory,
}

#[derive(Debug, Clone)]
pub struct FileMove {
    /// 1-based position within the subdirectory listing.
    pub index: usize,
    pub source: PathBuf,
    pub target: PathBuf,
    pub target_state: TargetState,
}

impl FileMove {
    pub fn original_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    pub fn new_name(&self) -> String {
        file_name_lossy(&self.target)
    }
}

#[derive(Debug, Clone)]
pub struct FolderPlan {
    pub name: OsString,
    pub path: PathBuf,
    pub moves: Vec<FileMove>,
}

impl FolderPlan {
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `{folder_name}_{index}{ext}`, where `ext` is the final suffix of
/// `file_name` including its dot. Names without a suffix, dotfiles and
/// names ending in a bare dot get none.
pub fn target_name(folder_name: &OsStr, index: usize, file_name: &OsStr) -> OsString {
    let mut name = folder_name.to_os_string();
    name.push(format!("_{}", index));
    if let Some(ext) = Path::new(file_name).extension().filter(|e| !e.is_empty()) {
        name.push(".");
        name.push(ext);
    }
    name
}

fn probe_target(target: &Path) -> Result<TargetState, Error> {
    match fs::symlink_metadata(target) {
        Ok(_) if target.is_dir() => Ok(TargetState::Directory),
        Ok(_) => Ok(TargetState::File),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(TargetState::Vacant),
        Err(err) => Err(Error::io(target, err)),
    }
}

/// Lists the files of `folder` and computes where each one lands in `root`.
/// Nothing is moved.
pub fn plan_folder(root: &Path, folder: &Path, sort: bool) -> Result<FolderPlan, Error> {
    let name = folder
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();

    let moves = listing::list_files(folder, sort)?
        .into_iter()
        .enumerate()
        .map(|(i, source)| -> Result<FileMove, Error> {
            let index = i + 1;
            let file_name = source.file_name().unwrap_or_default();
            let target = root.join(target_name(&name, index, file_name));
            let target_state = probe_target(&target)?;
            Ok(FileMove {
                index,
                source,
                target,
                target_state,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(FolderPlan {
        name,
        path: folder.to_path_buf(),
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn name(folder: &str, index: usize, file: &str) -> String {
        target_name(OsStr::new(folder), index, OsStr::new(file))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_target_name_keeps_extension() {
        assert_eq!(name("trip", 3, "beach.jpg"), "trip_3.jpg");
    }

    #[test]
    fn test_target_name_without_extension() {
        assert_eq!(name("trip", 1, "photo"), "trip_1");
    }

    #[test]
    fn test_target_name_uses_last_suffix_only() {
        assert_eq!(name("trip", 2, "photo.tar.gz"), "trip_2.gz");
    }

    #[test]
    fn test_target_name_dotfile_and_trailing_dot() {
        assert_eq!(name("cfg", 1, ".bashrc"), "cfg_1");
        assert_eq!(name("cfg", 2, "notes."), "cfg_2");
    }

    #[test]
    fn test_plan_folder_numbers_in_sorted_order() {
        let tmp = tempdir().unwrap();
        let folder = tmp.path().join("album");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("b.png"), "b").unwrap();
        fs::write(folder.join("a.jpg"), "a").unwrap();
        fs::create_dir(folder.join("nested")).unwrap();

        let plan = plan_folder(tmp.path(), &folder, true).unwrap();
        assert_eq!(plan.display_name(), "album");
        assert_eq!(plan.moves.len(), 2);
        assert_eq!(plan.moves[0].original_name(), "a.jpg");
        assert_eq!(plan.moves[0].new_name(), "album_1.jpg");
        assert_eq!(plan.moves[1].original_name(), "b.png");
        assert_eq!(plan.moves[1].new_name(), "album_2.png");
        assert!(plan
            .moves
            .iter()
            .all(|m| m.target_state == TargetState::Vacant));
    }

    #[test]
    fn test_plan_folder_detects_occupied_targets() {
        let tmp = tempdir().unwrap();
        let folder = tmp.path().join("x");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("one.txt"), "1").unwrap();
        fs::write(folder.join("two"), "2").unwrap();
        fs::write(tmp.path().join("x_1.txt"), "old").unwrap();
        fs::create_dir(tmp.path().join("x_2")).unwrap();

        let plan = plan_folder(tmp.path(), &folder, true).unwrap();
        assert_eq!(plan.moves[0].target_state, TargetState::File);
        assert_eq!(plan.moves[1].target_state, TargetState::Directory);
    }
}
