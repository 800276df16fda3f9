pub mod config;
pub mod error;
pub mod flatten;
pub mod platform;
pub mod progress;

pub use crate::config::{ConflictPolicy, FlattenConfig};
pub use crate::error::Error;
pub use crate::flatten::{flatten, FlattenSummary, Flattener, FolderReport, RemovalOutcome};
pub use crate::progress::{FlattenReporter, SilentReporter};
