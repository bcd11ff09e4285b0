use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One row of the target inventory grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TargetRow {
    pub target_name: Option<String>,
    #[serde(default)]
    pub partner: String,
    #[serde(default)]
    pub protein_class: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub subunit_count: u32,
    #[serde(default)]
    pub gene_count: u32,
    #[serde(default)]
    pub plasmid_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InventoryDocument {
    #[serde(default)]
    targets: Vec<TargetRow>,
}

#[derive(Debug, Error)]
pub enum InventoryLoadError {
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
}

pub fn parse_inventory(content: &str, origin: &str) -> Result<Vec<TargetRow>, InventoryLoadError> {
    let document: InventoryDocument =
        toml::from_str(content).map_err(|e| InventoryLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
    Ok(document.targets)
}

pub fn load_inventory(path: &Path) -> Result<Vec<TargetRow>, InventoryLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| InventoryLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_inventory(&content, &path.to_string_lossy())
}
