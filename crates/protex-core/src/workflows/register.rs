use crate::core::io::batch::RegistrationBatch;
use crate::core::models::subunit::Target;
use crate::validation::config::ValidationConfig;
use crate::validation::copies::validate_copy_selection;
use crate::validation::interaction::InteractionValidator;
use crate::validation::outcome::Outcome;
use crate::validation::ptm::PtmValidator;
use crate::validation::rule::DraftRule;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::error::WorkflowError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    pub valid: usize,
    pub invalid: usize,
    pub deferred: usize,
}

impl OutcomeTally {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Valid => self.valid += 1,
            Outcome::Invalid(_) => self.invalid += 1,
            Outcome::Deferred => self.deferred += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub target_name: String,
    pub ptms: Vec<Outcome>,
    pub interactions: Vec<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_selection: Option<Outcome>,
    pub tally: OutcomeTally,
}

impl RegistrationReport {
    /// A batch can be submitted only when every entry has a `Valid` verdict.
    pub fn is_submittable(&self) -> bool {
        self.tally.invalid == 0 && self.tally.deferred == 0
    }
}

#[instrument(skip_all, name = "registration_workflow", fields(target_name = %target.target_name))]
pub fn run(
    target: &Target,
    batch: &RegistrationBatch,
    config: &ValidationConfig,
) -> Result<RegistrationReport, WorkflowError> {
    let ptms = PtmValidator::with_config(&target.subunits, *config).check_all(&batch.ptms)?;
    let interactions =
        InteractionValidator::new(&target.subunits).check_all(&batch.interactions)?;
    let copy_selection = batch
        .copy_selection
        .as_ref()
        .map(|selection| validate_copy_selection(selection, &target.subunits))
        .transpose()?;

    let mut tally = OutcomeTally::default();
    ptms.iter()
        .chain(interactions.iter())
        .chain(copy_selection.iter())
        .for_each(|outcome| tally.record(outcome));

    info!(
        "Checked {} PTM(s) and {} interaction(s): {} valid, {} invalid, {} deferred.",
        ptms.len(),
        interactions.len(),
        tally.valid,
        tally.invalid,
        tally.deferred
    );
    if tally.invalid > 0 {
        warn!("Batch for '{}' has {} invalid entr(ies).", target.target_name, tally.invalid);
    }

    Ok(RegistrationReport {
        target_name: target.target_name.clone(),
        ptms,
        interactions,
        copy_selection,
        tally,
    })
}
