use super::error::ValidationError;
use crate::core::models::ids::SubunitId;
use crate::core::models::subunit::Subunit;

/// Upper bounds for the copy and residue inputs of one subunit. Both ranges start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointBounds {
    pub max_copies: u32,
    pub max_residue: u32,
}

impl EndpointBounds {
    pub fn contains_copy(&self, copy: u32) -> bool {
        (1..=self.max_copies).contains(&copy)
    }

    pub fn contains_residue(&self, residue: u32) -> bool {
        (1..=self.max_residue).contains(&residue)
    }
}

/// Derives input bounds from the subunits supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct RangeConstraints<'a> {
    subunits: &'a [Subunit],
}

impl<'a> RangeConstraints<'a> {
    pub fn new(subunits: &'a [Subunit]) -> Self {
        Self { subunits }
    }

    pub fn subunit(&self, id: SubunitId) -> Result<&'a Subunit, ValidationError> {
        self.subunits
            .iter()
            .find(|s| s.id == id)
            .ok_or(ValidationError::NotFound(id))
    }

    pub fn max_copies(&self, id: SubunitId) -> Result<u32, ValidationError> {
        Ok(self.subunit(id)?.copies)
    }

    pub fn max_residue(&self, id: SubunitId) -> Result<u32, ValidationError> {
        Ok(bounds_of(self.subunit(id)?).max_residue)
    }

    pub fn bounds(&self, id: SubunitId) -> Result<EndpointBounds, ValidationError> {
        Ok(bounds_of(self.subunit(id)?))
    }
}

pub(crate) fn bounds_of(subunit: &Subunit) -> EndpointBounds {
    EndpointBounds {
        max_copies: subunit.copies,
        max_residue: u32::try_from(subunit.residue_count()).unwrap_or(u32::MAX),
    }
}
