use crate::cli::{CheckArgs, OutputFormat};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use protex::validation::config::{
    ConfigError, DistinctnessCheck, ValidationConfig, ValidationConfigBuilder,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialValidationConfig {
    distinctness: Option<DistinctnessCheck>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    validation: Option<PartialValidationConfig>,
    output: Option<PartialOutputConfig>,
}

/// Settings for the `check` command after file, `--set` and flag values are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSettings {
    pub validation: ValidationConfig,
    pub format: OutputFormat,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the config file when one is given and applies `--set` overrides on top.
    pub fn load(path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_set_values(set_values)?;
        Ok(config)
    }

    pub fn merge_with_cli(self, args: &CheckArgs) -> Result<CheckSettings> {
        let validation_file = self.validation.unwrap_or_default();
        let output_file = self.output.unwrap_or_default();

        let distinctness = match &args.distinctness {
            Some(policy) => policy
                .parse::<DistinctnessCheck>()
                .map_err(|e| CliError::Argument(e.to_string()))?,
            None => validation_file.distinctness.unwrap_or_default(),
        };

        Ok(CheckSettings {
            validation: ValidationConfigBuilder::new()
                .distinctness(distinctness)
                .build(),
            format: args.format.or(output_file.format).unwrap_or_default(),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key.trim() {
                "validation.distinctness" => {
                    self.validation
                        .get_or_insert_with(Default::default)
                        .distinctness = Some(
                        value_str
                            .parse()
                            .map_err(|e: ConfigError| CliError::Config(e.to_string()))?,
                    );
                }
                "output.format" => {
                    self.output.get_or_insert_with(Default::default).format =
                        Some(OutputFormat::from_str(value_str.trim(), true).map_err(|_| {
                            CliError::Config(format!(
                                "Invalid output format for {}: {}. Expected 'text' or 'json'.",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn check_args(extra: &[&str]) -> CheckArgs {
        let mut args = vec!["protex", "check", "-t", "target.toml", "-b", "batch.toml"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Check(check) => check,
            other => panic!("Expected 'check' subcommand, got {other:?}"),
        }
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let args = check_args(&[]);
        let settings = PartialConfig::load(None, &[])
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(
            settings,
            CheckSettings {
                validation: ValidationConfig::default(),
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn file_values_are_used() {
        let path = write_config_file(
            "file_values.toml",
            r#"
            [validation]
            distinctness = "always"

            [output]
            format = "json"
            "#,
        );
        let args = check_args(&[]);
        let settings = PartialConfig::load(Some(path.as_path()), &[])
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(settings.validation.distinctness, DistinctnessCheck::Always);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn cli_flags_override_file_and_set_values() {
        let path = write_config_file(
            "overridden.toml",
            r#"
            [output]
            format = "json"
            "#,
        );
        let args = check_args(&["--format", "text", "--distinctness", "after-residue-check"]);
        let settings = PartialConfig::load(
            Some(path.as_path()),
            &["validation.distinctness=always".to_string()],
        )
        .unwrap()
        .merge_with_cli(&args)
        .unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(
            settings.validation.distinctness,
            DistinctnessCheck::AfterResidueCheck
        );
    }

    #[test]
    fn set_value_overrides_file() {
        let path = write_config_file(
            "set_values.toml",
            r#"
            [validation]
            distinctness = "after-residue-check"
            "#,
        );
        let args = check_args(&[]);
        let settings = PartialConfig::load(
            Some(path.as_path()),
            &[
                "validation.distinctness=always".to_string(),
                "output.format=JSON".to_string(),
            ],
        )
        .unwrap()
        .merge_with_cli(&args)
        .unwrap();
        assert_eq!(settings.validation.distinctness, DistinctnessCheck::Always);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["no-equals-sign", "unknown.key=1", "output.format=xml"] {
            let result = PartialConfig::load(None, &[bad.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn unknown_fields_in_file_are_rejected() {
        let path = write_config_file(
            "unknown_field.toml",
            r#"
            [validation]
            strictness = "high"
            "#,
        );
        let result = PartialConfig::load(Some(path.as_path()), &[]);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn bad_distinctness_flag_is_an_argument_error() {
        let args = check_args(&["--distinctness", "sometimes"]);
        let result = PartialConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
