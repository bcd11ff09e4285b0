use super::config::{DistinctnessCheck, ValidationConfig};
use super::error::ValidationError;
use super::outcome::{Outcome, Violation, ViolationSet};
use super::ranges::{RangeConstraints, bounds_of};
use super::rule::DraftRule;
use crate::core::models::bond::{BondEndpoint, PtmDraft};
use crate::core::models::residue::AminoAcid;
use crate::core::models::subunit::Subunit;
use tracing::trace;

/// Cross-field validator for PTM bond entries.
///
/// Evaluation order:
/// 1. Completeness: all seven fields present, copies and residues within the
///    bounds of their subunits, bond type not blank. Otherwise `Deferred`.
/// 2. Residue identity: both residues must be cysteine. Both violations are
///    collected.
/// 3. Distinctness: the two endpoints must differ. Under the default policy
///    this runs only when step 2 found nothing.
#[derive(Debug, Clone, Copy)]
pub struct PtmValidator<'a> {
    ranges: RangeConstraints<'a>,
    config: ValidationConfig,
}

impl<'a> PtmValidator<'a> {
    pub fn new(subunits: &'a [Subunit]) -> Self {
        Self::with_config(subunits, ValidationConfig::default())
    }

    pub fn with_config(subunits: &'a [Subunit], config: ValidationConfig) -> Self {
        Self {
            ranges: RangeConstraints::new(subunits),
            config,
        }
    }

    fn resolve(&self, endpoint: &BondEndpoint) -> Result<Option<&'a Subunit>, ValidationError> {
        let subunit = self.ranges.subunit(endpoint.subunit)?;
        let bounds = bounds_of(subunit);
        if bounds.contains_copy(endpoint.copy) && bounds.contains_residue(endpoint.residue) {
            Ok(Some(subunit))
        } else {
            trace!("Endpoint {:?} is outside {:?}.", endpoint, bounds);
            Ok(None)
        }
    }
}

fn is_cysteine(subunit: &Subunit, residue: u32) -> bool {
    subunit.amino_acid_at(residue) == Some(AminoAcid::Cysteine)
}

impl DraftRule for PtmValidator<'_> {
    type Draft = PtmDraft;

    fn check(&self, draft: &PtmDraft) -> Result<Outcome, ValidationError> {
        for id in [draft.subunit_one, draft.subunit_two].into_iter().flatten() {
            self.ranges.subunit(id)?;
        }
        let Some(candidate) = draft.candidate() else {
            return Ok(Outcome::Deferred);
        };
        let (Some(subunit_one), Some(subunit_two)) =
            (self.resolve(&candidate.one)?, self.resolve(&candidate.two)?)
        else {
            return Ok(Outcome::Deferred);
        };

        let mut violations = ViolationSet::new();
        if !is_cysteine(subunit_one, candidate.one.residue) {
            violations.insert(Violation::ResidueOneCysteine);
        }
        if !is_cysteine(subunit_two, candidate.two.residue) {
            violations.insert(Violation::ResidueTwoCysteine);
        }

        let check_distinct = match self.config.distinctness {
            DistinctnessCheck::AfterResidueCheck => violations.is_empty(),
            DistinctnessCheck::Always => true,
        };
        if check_distinct && candidate.one == candidate.two {
            violations.insert(Violation::DistinctBondPoints);
        }

        Ok(Outcome::from_violations(violations))
    }
}

/// Validates one PTM draft with the default policy.
pub fn validate_ptm(draft: &PtmDraft, subunits: &[Subunit]) -> Result<Outcome, ValidationError> {
    PtmValidator::new(subunits).check(draft)
}
