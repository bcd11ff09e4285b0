use crate::core::io::fasta::FastaEntry;
use crate::core::models::subunit::{Gene, Target};
use crate::validation::genes::check_gene_upload;
use tracing::{info, instrument};

use super::error::WorkflowError;

/// Screens uploaded FASTA entries for a named subunit and converts them into
/// the gene records to register. Nothing is returned unless the whole batch passes.
#[instrument(skip(target, entries), name = "gene_upload_workflow")]
pub fn stage(
    target: &Target,
    subunit_name: &str,
    entries: &[FastaEntry],
) -> Result<Vec<Gene>, WorkflowError> {
    let subunit = target
        .subunit_by_name(subunit_name)
        .ok_or_else(|| WorkflowError::UnknownSubunitName(subunit_name.to_string()))?;

    check_gene_upload(&subunit.name, subunit.gene_descriptions(), entries)?;

    info!(
        "Accepted {} gene(s) for subunit '{}'.",
        entries.len(),
        subunit.name
    );
    Ok(entries
        .iter()
        .map(|e| Gene::new(&e.description, &e.sequence))
        .collect())
}
