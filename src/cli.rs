use clap::Parser;
use flatten_dirs::{ConflictPolicy, FlattenConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "flatten-dirs")]
#[command(
    about = "Move the files of each subdirectory up into the parent as <folder>_<n>.<ext>",
    long_about = None
)]
pub struct Cli {
    /// Directory to flatten [default: current directory]
    pub root: Option<PathBuf>,

    /// Sort subdirectories and files by name before numbering
    #[arg(long)]
    pub sort: bool,

    /// What to do when a target name already exists in the root
    #[arg(long, value_enum)]
    pub on_conflict: Option<ConflictPolicy>,

    /// Print the planned moves without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Flags win over `FLATTEN_*` environment defaults.
    pub fn apply(&self, mut config: FlattenConfig) -> FlattenConfig {
        config.sort |= self.sort;
        config.dry_run |= self.dry_run;
        if let Some(policy) = self.on_conflict {
            config.on_conflict = policy;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_defaults() {
        let cli = Cli::parse_from(["flatten-dirs"]);
        assert!(cli.root.is_none());

        let config = cli.apply(FlattenConfig::default());
        assert!(!config.sort);
        assert!(!config.dry_run);
        assert_eq!(config.on_conflict, ConflictPolicy::Overwrite);
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::parse_from(["flatten-dirs", "pics", "--sort", "--on-conflict", "fail"]);
        assert_eq!(cli.root, Some(PathBuf::from("pics")));

        let env_config = FlattenConfig {
            on_conflict: ConflictPolicy::Skip,
            dry_run: true,
            ..FlattenConfig::default()
        };
        let config = cli.apply(env_config);
        assert!(config.sort);
        assert!(config.dry_run);
        assert_eq!(config.on_conflict, ConflictPolicy::Fail);
    }
}
