use crate::core::models::subunit::Target;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TargetLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Duplicate subunit id {0} in target")]
    DuplicateSubunitId(u32),
    #[error("Duplicate subunit name '{0}' in target")]
    DuplicateSubunitName(String),
    #[error("Subunit '{0}' must have at least one copy")]
    ZeroCopies(String),
}

pub fn parse_target(content: &str, origin: &str) -> Result<Target, TargetLoadError> {
    let target: Target = toml::from_str(content).map_err(|e| TargetLoadError::Toml {
        path: origin.to_string(),
        source: e,
    })?;
    check_integrity(&target)?;
    debug!(
        "Loaded target '{}' with {} subunit(s).",
        target.target_name,
        target.subunits.len()
    );
    Ok(target)
}

pub fn load_target(path: &Path) -> Result<Target, TargetLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| TargetLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_target(&content, &path.to_string_lossy())
}

fn check_integrity(target: &Target) -> Result<(), TargetLoadError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for subunit in &target.subunits {
        if !ids.insert(subunit.id) {
            return Err(TargetLoadError::DuplicateSubunitId(subunit.id.0));
        }
        if !names.insert(subunit.name.as_str()) {
            return Err(TargetLoadError::DuplicateSubunitName(subunit.name.clone()));
        }
        if subunit.copies == 0 {
            return Err(TargetLoadError::ZeroCopies(subunit.name.clone()));
        }
    }
    Ok(())
}
