use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unknown distinctness policy '{0}'. Expected 'after-residue-check' or 'always'.")]
    UnknownDistinctnessPolicy(String),
}

/// When the identical-endpoint rule of a PTM is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistinctnessCheck {
    /// Only once both residues are cysteine.
    #[default]
    AfterResidueCheck,
    /// Regardless of the residue check; violations accumulate.
    Always,
}

impl FromStr for DistinctnessCheck {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "after-residue-check" => Ok(DistinctnessCheck::AfterResidueCheck),
            "always" => Ok(DistinctnessCheck::Always),
            other => Err(ConfigError::UnknownDistinctnessPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub distinctness: DistinctnessCheck,
}

#[derive(Default)]
pub struct ValidationConfigBuilder {
    distinctness: Option<DistinctnessCheck>,
}

impl ValidationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinctness(mut self, policy: DistinctnessCheck) -> Self {
        self.distinctness = Some(policy);
        self
    }

    pub fn build(self) -> ValidationConfig {
        ValidationConfig {
            distinctness: self.distinctness.unwrap_or_default(),
        }
    }
}
