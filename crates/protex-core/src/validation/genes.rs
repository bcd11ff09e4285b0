use crate::core::io::fasta::FastaEntry;
use thiserror::Error;
use tracing::debug;

const NO_STOP_SUFFIX: &str = "_no_stop";
const VERSION_MARKER: &str = "_v";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneUploadError {
    #[error("Attempted to add a gene to wrong subunit ({0}). No genes were added.")]
    WrongSubunit(String),
    #[error("Attempted to add a duplicate gene ({0}). No genes were added.")]
    DuplicateGene(String),
}

/// Extracts the subunit name encoded in a gene description.
///
/// Strips at most one trailing suffix, either `_v<digits>` or `_no_stop`:
///
/// - `TP53_v2` → `TP53`, `TP53_no_stop` → `TP53`
/// - `TP53_v1_no_stop` → `TP53_v1` (only one suffix goes)
/// - `TP53_v` → `TP53_v` (a version needs digits)
///
/// The remaining name must be non-empty, so a description that is nothing
/// but a suffix (`_v1`, `_no_stop`) comes back whole and is treated as a
/// subunit name in its own right.
pub fn extract_subunit_name(description: &str) -> &str {
    if let Some(stem) = description.strip_suffix(NO_STOP_SUFFIX) {
        if !stem.is_empty() {
            return stem;
        }
    }
    if let Some(pos) = description.rfind(VERSION_MARKER) {
        let digits = &description[pos + VERSION_MARKER.len()..];
        if pos > 0 && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return &description[..pos];
        }
    }
    description
}

/// Screens a batch of uploaded genes for one subunit before anything is registered.
///
/// Every entry must encode `subunit_name`; the first mismatch rejects the
/// batch with [`GeneUploadError::WrongSubunit`]. Only then are descriptions
/// compared with the subunit's registered genes, and the first exact match
/// rejects the batch with [`GeneUploadError::DuplicateGene`].
pub fn check_gene_upload<'a>(
    subunit_name: &str,
    existing_descriptions: impl IntoIterator<Item = &'a str>,
    entries: &[FastaEntry],
) -> Result<(), GeneUploadError> {
    for entry in entries {
        let extracted = extract_subunit_name(&entry.description);
        if extracted != subunit_name {
            debug!(
                "Gene '{}' encodes subunit '{}', expected '{}'.",
                entry.description, extracted, subunit_name
            );
            return Err(GeneUploadError::WrongSubunit(extracted.to_string()));
        }
    }

    let existing: Vec<&str> = existing_descriptions.into_iter().collect();
    if let Some(duplicate) = entries
        .iter()
        .find(|entry| existing.contains(&entry.description.as_str()))
    {
        return Err(GeneUploadError::DuplicateGene(duplicate.description.clone()));
    }

    Ok(())
}
