use crate::core::models::ids::SubunitId;
use thiserror::Error;

/// Caller precondition violations. These are never folded into a validation
/// outcome: an unknown subunit means the caller passed the wrong subunit list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Subunit not found: {0}")]
    NotFound(SubunitId),
}
