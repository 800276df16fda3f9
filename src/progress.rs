use crate::flatten::FlattenSummary;

/// Trait for reporting flatten progress.
///
/// The CLI implements it with indicatif and colored output.
/// All methods have default no-op implementations.
pub trait FlattenReporter: Send + Sync {
    fn on_subdirectories_found(&self, _count: usize) {}
    fn on_folder_start(&self, _name: &str, _file_count: usize) {}
    fn on_file_moved(&self, _from: &str, _to: &str) {}
    fn on_file_planned(&self, _from: &str, _to: &str, _replaces_existing: bool) {}
    fn on_file_skipped(&self, _from: &str, _to: &str) {}
    fn on_folder_removed(&self, _name: &str) {}
    fn on_folder_retained(&self, _name: &str, _reason: &str) {}
    fn on_complete(&self, _summary: &FlattenSummary) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl FlattenReporter for SilentReporter {}
