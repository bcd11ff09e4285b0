use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identity of a subunit, unique within a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubunitId(pub u32);

impl fmt::Display for SubunitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
