use colored::*;
use flatten_dirs::{FlattenReporter, FlattenSummary};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// CLI progress reporter.
///
/// One bar per subdirectory; per-file lines are printed above it so they
/// survive when stdout is not a terminal and the bar is hidden.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn finish_bar(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }

    fn line(&self, msg: String) {
        let guard = self.bar.lock().unwrap();
        match guard.as_ref() {
            Some(pb) => pb.suspend(|| println!("{}", msg)),
            None => println!("{}", msg),
        }
    }

    fn tick(&self) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            pb.inc(1);
        }
    }
}

impl FlattenReporter for CliReporter {
    fn on_subdirectories_found(&self, count: usize) {
        println!("Found {} subdirectories to process", count);
    }

    fn on_folder_start(&self, name: &str, file_count: usize) {
        println!();
        println!("Processing folder: {}", name.bold());
        println!("Found {} files", file_count);

        let pb = ProgressBar::new(file_count as u64);
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} files")
                .unwrap()
                .progress_chars("━╸─")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        self.set_bar(pb);
    }

    fn on_file_moved(&self, from: &str, to: &str) {
        self.line(format!("  Moved: {} -> {}", from, to));
        self.tick();
    }

    fn on_file_planned(&self, from: &str, to: &str, replaces_existing: bool) {
        let note = if replaces_existing {
            format!(" {}", "(replaces existing file)".yellow())
        } else {
            String::new()
        };
        self.line(format!("  Would move: {} -> {}{}", from, to, note));
        self.tick();
    }

    fn on_file_skipped(&self, from: &str, to: &str) {
        self.line(format!(
            "  {} {} -> {}: target exists",
            "Skipped:".yellow(),
            from,
            to
        ));
        self.tick();
    }

    fn on_folder_removed(&self, name: &str) {
        self.finish_bar();
        println!("  {} Deleted empty folder: {}", "✓".green(), name);
    }

    fn on_folder_retained(&self, name: &str, reason: &str) {
        self.finish_bar();
        println!("  {} Error deleting folder {}: {}", "✗".red(), name, reason);
    }

    fn on_complete(&self, summary: &FlattenSummary) {
        self.finish_bar();
        println!();
        if summary.dry_run {
            println!(
                "Dry run: {} files would move from {} subdirectories, {} skipped",
                format!("{}", summary.files_moved()).cyan(),
                summary.subdirectories_found(),
                summary.files_skipped(),
            );
            return;
        }
        println!("All files have been processed successfully!");
        println!(
            "{} files moved, {} skipped, {} folders deleted, {} folders kept",
            format!("{}", summary.files_moved()).green(),
            format!("{}", summary.files_skipped()).yellow(),
            format!("{}", summary.folders_removed()).green(),
            format!("{}", summary.folders_retained()).red(),
        );
    }
}
