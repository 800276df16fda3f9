pub mod listing;
pub mod plan;
pub mod relocate;

use crate::config::{ConflictPolicy, FlattenConfig};
use crate::error::Error;
use crate::progress::{FlattenReporter, SilentReporter};
use plan::{FileMove, FolderPlan, TargetState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Flattener {
    root: PathBuf,
    config: FlattenConfig,
}

/// What became of a subdirectory once its files were handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    /// The directory could not be removed, usually because entries that are
    /// not plain files are still inside it.
    Retained { reason: String },
    /// Dry run; the directory was left alone.
    NotAttempted,
}

#[derive(Debug, Clone)]
pub struct FolderReport {
    pub name: String,
    pub moved: Vec<FileMove>,
    pub skipped: Vec<FileMove>,
    pub removal: RemovalOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct FlattenSummary {
    pub dry_run: bool,
    pub folders: Vec<FolderReport>,
}

impl FlattenSummary {
    pub fn subdirectories_found(&self) -> usize {
        self.folders.len()
    }

    pub fn files_moved(&self) -> usize {
        self.folders.iter().map(|f| f.moved.len()).sum()
    }

    pub fn files_skipped(&self) -> usize {
        self.folders.iter().map(|f| f.skipped.len()).sum()
    }

    pub fn folders_removed(&self) -> usize {
        self.count_removal(|r| matches!(r, RemovalOutcome::Removed))
    }

    pub fn folders_retained(&self) -> usize {
        self.count_removal(|r| matches!(r, RemovalOutcome::Retained { .. }))
    }

    fn count_removal(&self, pred: impl Fn(&RemovalOutcome) -> bool) -> usize {
        self.folders.iter().filter(|f| pred(&f.removal)).count()
    }
}

impl Flattener {
    pub fn new(root: impl Into<PathBuf>, config: FlattenConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Flatten every immediate subdirectory of the root:
    /// 1. List subdirectories (directories only, links followed)
    /// 2. Per subdirectory, plan `{name}_{i}{ext}` targets and move each file into the root
    /// 3. Remove the subdirectory if nothing is left in it
    ///
    /// Only a failed removal is recoverable; every other failure aborts the run
    /// and leaves the tree as it was at that moment.
    pub fn run(&self, reporter: &dyn FlattenReporter) -> Result<FlattenSummary, Error> {
        let metadata = fs::metadata(&self.root).map_err(|e| Error::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory(self.root.clone()));
        }

        let subdirs = listing::list_subdirectories(&self.root, self.config.sort)?;
        debug!(
            "Found {} subdirectories under {}",
            subdirs.len(),
            self.root.display()
        );
        reporter.on_subdirectories_found(subdirs.len());

        let mut folders = Vec::with_capacity(subdirs.len());
        for subdir in &subdirs {
            let plan = plan::plan_folder(&self.root, subdir, self.config.sort)?;
            self.check_conflicts(&plan)?;

            let report = if self.config.dry_run {
                self.preview(plan, reporter)
            } else {
                self.apply(plan, reporter)?
            };
            folders.push(report);
        }

        let summary = FlattenSummary {
            dry_run: self.config.dry_run,
            folders,
        };
        reporter.on_complete(&summary);
        Ok(summary)
    }

    /// Fails before any file of the subdirectory moves.
    fn check_conflicts(&self, plan: &FolderPlan) -> Result<(), Error> {
        for file_move in &plan.moves {
            match file_move.target_state {
                TargetState::Directory => {
                    return Err(Error::TargetIsDirectory(file_move.target.clone()));
                }
                TargetState::File if self.config.on_conflict == ConflictPolicy::Fail => {
                    return Err(Error::WouldOverwrite {
                        from: file_move.source.clone(),
                        to: file_move.target.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn skips(&self, file_move: &FileMove) -> bool {
        self.config.on_conflict == ConflictPolicy::Skip
            && file_move.target_state == TargetState::File
    }

    fn apply(&self, plan: FolderPlan, reporter: &dyn FlattenReporter) -> Result<FolderReport, Error> {
        let name = plan.display_name();
        reporter.on_folder_start(&name, plan.moves.len());

        let mut moved = Vec::new();
        let mut skipped = Vec::new();
        for file_move in plan.moves {
            let (from, to) = (file_move.original_name(), file_move.new_name());
            if self.skips(&file_move) {
                debug!("Skipping {} -> {}: target exists", from, to);
                reporter.on_file_skipped(&from, &to);
                skipped.push(file_move);
                continue;
            }
            if file_move.target_state == TargetState::File {
                debug!("Replacing existing {}", file_move.target.display());
            }

            relocate::relocate(&file_move.source, &file_move.target)?;
            debug!("Moved {} -> {}", file_move.source.display(), file_move.target.display());
            reporter.on_file_moved(&from, &to);
            moved.push(file_move);
        }

        let removal = match fs::remove_dir(&plan.path) {
            Ok(()) => {
                reporter.on_folder_removed(&name);
                RemovalOutcome::Removed
            }
            Err(err) => {
                debug!("Could not remove {}: {}", plan.path.display(), err);
                let reason = err.to_string();
                reporter.on_folder_retained(&name, &reason);
                RemovalOutcome::Retained { reason }
            }
        };

        Ok(FolderReport {
            name,
            moved,
            skipped,
            removal,
        })
    }

    fn preview(&self, plan: FolderPlan, reporter: &dyn FlattenReporter) -> FolderReport {
        let name = plan.display_name();
        reporter.on_folder_start(&name, plan.moves.len());

        let (skipped, moved): (Vec<_>, Vec<_>) =
            plan.moves.into_iter().partition(|m| self.skips(m));
        for file_move in &moved {
            reporter.on_file_planned(
                &file_move.original_name(),
                &file_move.new_name(),
                file_move.target_state == TargetState::File,
            );
        }
        for file_move in &skipped {
            reporter.on_file_skipped(&file_move.original_name(), &file_move.new_name());
        }

        FolderReport {
            name,
            moved,
            skipped,
            removal: RemovalOutcome::NotAttempted,
        }
    }
}

/// Flatten `root` with default settings and no progress output.
pub fn flatten(root: &Path) -> Result<FlattenSummary, Error> {
    Flattener::new(root, FlattenConfig::default()).run(&SilentReporter)
}
