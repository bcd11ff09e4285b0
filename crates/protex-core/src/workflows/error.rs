use crate::validation::error::ValidationError;
use crate::validation::genes::GeneUploadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    GeneUpload(#[from] GeneUploadError),

    #[error("Target has no subunit named '{0}'")]
    UnknownSubunitName(String),
}
