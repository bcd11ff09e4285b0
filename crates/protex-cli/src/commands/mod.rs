pub mod check;
pub mod genes;
pub mod ranges;
pub mod search;

use crate::error::{CliError, Result};
use protex::core::io::target;
use protex::core::models::subunit::Target;
use std::path::Path;
use tracing::info;

pub(crate) fn load_target(path: &Path) -> Result<Target> {
    info!("Loading target from {:?}", path);
    target::load_target(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
