use super::error::ValidationError;
use super::outcome::Outcome;
use super::ranges::RangeConstraints;
use super::rule::DraftRule;
use crate::core::models::bond::{InteractionDraft, InteractionEndpoint};
use crate::core::models::subunit::Subunit;

/// Validator for subunit interaction entries. A complete draft with copies in
/// range is valid; there is no higher-level interaction rule.
#[derive(Debug, Clone, Copy)]
pub struct InteractionValidator<'a> {
    ranges: RangeConstraints<'a>,
}

impl<'a> InteractionValidator<'a> {
    pub fn new(subunits: &'a [Subunit]) -> Self {
        Self {
            ranges: RangeConstraints::new(subunits),
        }
    }

    fn in_range(&self, endpoint: &InteractionEndpoint) -> Result<bool, ValidationError> {
        Ok(self.ranges.bounds(endpoint.subunit)?.contains_copy(endpoint.copy))
    }
}

impl DraftRule for InteractionValidator<'_> {
    type Draft = InteractionDraft;

    fn check(&self, draft: &InteractionDraft) -> Result<Outcome, ValidationError> {
        for id in [draft.subunit_one, draft.subunit_two].into_iter().flatten() {
            self.ranges.subunit(id)?;
        }
        let Some(candidate) = draft.candidate() else {
            return Ok(Outcome::Deferred);
        };
        let one_ok = self.in_range(&candidate.one)?;
        let two_ok = self.in_range(&candidate.two)?;
        if one_ok && two_ok {
            Ok(Outcome::Valid)
        } else {
            Ok(Outcome::Deferred)
        }
    }
}

pub fn validate_interaction(
    draft: &InteractionDraft,
    subunits: &[Subunit],
) -> Result<Outcome, ValidationError> {
    InteractionValidator::new(subunits).check(draft)
}
