use super::error::ValidationError;
use super::outcome::{Outcome, Violation, ViolationSet};
use crate::core::models::ids::SubunitId;
use crate::core::models::subunit::Subunit;
use std::collections::BTreeMap;

/// Copy counts chosen per subunit. `None` is a blank or non-numeric entry.
pub type CopySelection = BTreeMap<SubunitId, Option<u32>>;

/// Checks a per-subunit copy selection for whole-target property calculation.
///
/// Subunits missing from `selection` keep their full copy count, matching an
/// entry form pre-filled from the target. Each count must lie in
/// `0..=subunit.copies`; blank or out-of-range entries defer. If every count
/// is zero the selection violates `notAllZero`.
pub fn validate_copy_selection(
    selection: &CopySelection,
    subunits: &[Subunit],
) -> Result<Outcome, ValidationError> {
    if let Some(unknown) = selection
        .keys()
        .find(|id| !subunits.iter().any(|s| s.id == **id))
    {
        return Err(ValidationError::NotFound(*unknown));
    }

    let mut all_zero = true;
    for subunit in subunits {
        let count = match selection.get(&subunit.id) {
            Some(Some(count)) => *count,
            Some(None) => return Ok(Outcome::Deferred),
            None => subunit.copies,
        };
        if count > subunit.copies {
            return Ok(Outcome::Deferred);
        }
        all_zero &= count == 0;
    }

    let mut violations = ViolationSet::new();
    if all_zero {
        violations.insert(Violation::NotAllZero);
    }
    Ok(Outcome::from_violations(violations))
}
