use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

/// What happens when a computed target name already exists in the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing file.
    #[default]
    Overwrite,
    /// Abort before touching the subdirectory.
    Fail,
    /// Leave the source file where it is.
    Skip,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlattenConfig {
    #[serde(default)]
    pub sort: bool,
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
    #[serde(default)]
    pub dry_run: bool,
}

/// Reads `FLATTEN_*` environment variables. There is no file source.
pub fn load_configuration() -> Result<FlattenConfig, ConfigError> {
    load_from(None)
}

fn load_from(source: Option<Map<String, String>>) -> Result<FlattenConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(
            Environment::with_prefix("FLATTEN")
                .try_parsing(true)
                .source(source),
        )
        .build()?;
    builder.try_deserialize::<FlattenConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_from(env(&[])).unwrap();
        assert!(!config.sort);
        assert!(!config.dry_run);
        assert_eq!(config.on_conflict, ConflictPolicy::Overwrite);
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_from(env(&[
            ("FLATTEN_SORT", "true"),
            ("FLATTEN_ON_CONFLICT", "skip"),
        ]))
        .unwrap();
        assert!(config.sort);
        assert!(!config.dry_run);
        assert_eq!(config.on_conflict, ConflictPolicy::Skip);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = load_from(env(&[("FLATTEN_ON_CONFLICT", "rename")]));
        assert!(result.is_err());
    }
}
