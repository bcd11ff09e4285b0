use crate::core::models::bond::{InteractionDraft, PtmDraft};
use crate::core::models::ids::SubunitId;
use crate::core::models::subunit::Target;
use crate::validation::copies::CopySelection;
use crate::validation::number::parse_count;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// A numeric field as it arrives from an entry form. Any TOML value is accepted;
/// only whole numbers and digit strings become counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Float(f64),
    Text(String),
    Other(toml::Value),
}

impl FieldValue {
    /// Converts to a count; negative, fractional or non-numeric values are `None`.
    pub fn to_count(&self) -> Option<u32> {
        match self {
            FieldValue::Number(n) => u32::try_from(*n).ok(),
            FieldValue::Text(s) => parse_count(s).ok().flatten(),
            FieldValue::Float(_) | FieldValue::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPtm {
    subunit_one: Option<String>,
    copy_one: Option<FieldValue>,
    residue_one: Option<FieldValue>,
    subunit_two: Option<String>,
    copy_two: Option<FieldValue>,
    residue_two: Option<FieldValue>,
    bond_type: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawInteraction {
    subunit_one: Option<String>,
    copy_one: Option<FieldValue>,
    subunit_two: Option<String>,
    copy_two: Option<FieldValue>,
    interaction: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawBatch {
    #[serde(default)]
    ptms: Vec<RawPtm>,
    #[serde(default)]
    interactions: Vec<RawInteraction>,
    copy_selection: Option<BTreeMap<String, FieldValue>>,
}

/// Drafts entered for one target, with subunit names resolved to ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationBatch {
    pub ptms: Vec<PtmDraft>,
    pub interactions: Vec<InteractionDraft>,
    pub copy_selection: Option<CopySelection>,
}

#[derive(Debug, Error)]
pub enum BatchLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Batch refers to subunit '{name}', which target '{target}' does not have")]
    UnknownSubunit { name: String, target: String },
    #[error("Copy selection lists subunit '{0}' more than once")]
    DuplicateSelection(String),
}

struct Resolver<'a> {
    target: &'a Target,
}

impl Resolver<'_> {
    fn subunit(&self, name: Option<&str>) -> Result<Option<SubunitId>, BatchLoadError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };
        self.target
            .subunit_by_name(name)
            .map(|s| Some(s.id))
            .ok_or_else(|| BatchLoadError::UnknownSubunit {
                name: name.to_string(),
                target: self.target.target_name.clone(),
            })
    }

    fn count(value: Option<&FieldValue>) -> Option<u32> {
        let parsed = value.and_then(FieldValue::to_count);
        if value.is_some() && parsed.is_none() {
            debug!("Ignoring non-numeric count entry {:?}.", value);
        }
        parsed
    }

    fn ptm(&self, raw: &RawPtm) -> Result<PtmDraft, BatchLoadError> {
        Ok(PtmDraft {
            subunit_one: self.subunit(raw.subunit_one.as_deref())?,
            copy_one: Self::count(raw.copy_one.as_ref()),
            residue_one: Self::count(raw.residue_one.as_ref()),
            subunit_two: self.subunit(raw.subunit_two.as_deref())?,
            copy_two: Self::count(raw.copy_two.as_ref()),
            residue_two: Self::count(raw.residue_two.as_ref()),
            bond_type: raw.bond_type.clone(),
        })
    }

    fn interaction(&self, raw: &RawInteraction) -> Result<InteractionDraft, BatchLoadError> {
        Ok(InteractionDraft {
            subunit_one: self.subunit(raw.subunit_one.as_deref())?,
            copy_one: Self::count(raw.copy_one.as_ref()),
            subunit_two: self.subunit(raw.subunit_two.as_deref())?,
            copy_two: Self::count(raw.copy_two.as_ref()),
            interaction: raw.interaction.clone(),
        })
    }
}

pub fn parse_batch(
    content: &str,
    origin: &str,
    target: &Target,
) -> Result<RegistrationBatch, BatchLoadError> {
    let raw: RawBatch = toml::from_str(content).map_err(|e| BatchLoadError::Toml {
        path: origin.to_string(),
        source: e,
    })?;
    let resolver = Resolver { target };

    let ptms = raw
        .ptms
        .iter()
        .map(|p| resolver.ptm(p))
        .collect::<Result<Vec<_>, _>>()?;
    let interactions = raw
        .interactions
        .iter()
        .map(|i| resolver.interaction(i))
        .collect::<Result<Vec<_>, _>>()?;
    let copy_selection = match raw.copy_selection {
        Some(table) => {
            let mut selection = CopySelection::new();
            for (name, value) in &table {
                if let Some(id) = resolver.subunit(Some(name.as_str()))? {
                    if selection.insert(id, value.to_count()).is_some() {
                        return Err(BatchLoadError::DuplicateSelection(name.trim().to_string()));
                    }
                }
            }
            Some(selection)
        }
        None => None,
    };

    debug!(
        "Loaded batch with {} PTM(s) and {} interaction(s).",
        ptms.len(),
        interactions.len()
    );
    Ok(RegistrationBatch {
        ptms,
        interactions,
        copy_selection,
    })
}

pub fn load_batch(path: &Path, target: &Target) -> Result<RegistrationBatch, BatchLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| BatchLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_batch(&content, &path.to_string_lossy(), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::subunit::Subunit;

    fn target() -> Target {
        Target {
            target_name: "complex".into(),
            partner: String::new(),
            protein_class: String::new(),
            project_name: String::new(),
            notes: String::new(),
            subunits: vec![
                Subunit::new(SubunitId(10), "TP53", "MCDE", 2),
                Subunit::new(SubunitId(11), "MDM2", "MCNTNC", 1),
            ],
        }
    }

    #[test]
    fn resolves_names_and_counts() {
        let content = r#"
            [[ptms]]
            subunit-one = "TP53"
            copy-one = 1
            residue-one = "2"
            subunit-two = "MDM2"
            copy-two = 1
            residue-two = 6
            bond-type = "disulfide"

            [[interactions]]
            subunit-one = "TP53"
            copy-one = 2
            subunit-two = "MDM2"
            copy-two = 1
            interaction = "binds"
        "#;
        let batch = parse_batch(content, "inline", &target()).unwrap();
        assert_eq!(
            batch.ptms,
            vec![
                PtmDraft::new()
                    .endpoint_one(SubunitId(10), 1, 2)
                    .endpoint_two(SubunitId(11), 1, 6)
                    .bond_type("disulfide")
            ]
        );
        assert_eq!(
            batch.interactions,
            vec![
                InteractionDraft::new()
                    .endpoint_one(SubunitId(10), 2)
                    .endpoint_two(SubunitId(11), 1)
                    .interaction("binds")
            ]
        );
        assert!(batch.copy_selection.is_none());
    }

    #[test]
    fn missing_and_malformed_fields_become_blank() {
        let content = r#"
            [[ptms]]
            subunit-one = "TP53"
            copy-one = -1
            residue-one = "2.5"
            subunit-two = "  "
            bond-type = "disulfide"
        "#;
        let batch = parse_batch(content, "inline", &target()).unwrap();
        let draft = &batch.ptms[0];
        assert_eq!(draft.subunit_one, Some(SubunitId(10)));
        assert_eq!(draft.copy_one, None);
        assert_eq!(draft.residue_one, None);
        assert_eq!(draft.subunit_two, None);
        assert_eq!(draft.copy_two, None);
    }

    #[test]
    fn fractional_and_non_numeric_values_leave_the_entry_incomplete() {
        let content = r#"
            [[ptms]]
            subunit-one = "TP53"
            copy-one = 1.0
            residue-one = 2.5
            subunit-two = "MDM2"
            copy-two = true
            residue-two = [6]
            bond-type = "disulfide"

            [copy-selection]
            TP53 = 0.5
        "#;
        let batch = parse_batch(content, "inline", &target()).unwrap();
        let draft = &batch.ptms[0];
        assert_eq!(draft.subunit_one, Some(SubunitId(10)));
        assert_eq!(draft.copy_one, None);
        assert_eq!(draft.residue_one, None);
        assert_eq!(draft.copy_two, None);
        assert_eq!(draft.residue_two, None);
        assert_eq!(
            batch.copy_selection.unwrap().get(&SubunitId(10)),
            Some(&None)
        );
    }

    #[test]
    fn copy_selection_names_that_differ_only_in_whitespace_are_duplicates() {
        let content = r#"
            [copy-selection]
            TP53 = 1
            " TP53 " = 2
        "#;
        match parse_batch(content, "inline", &target()) {
            Err(BatchLoadError::DuplicateSelection(name)) => assert_eq!(name, "TP53"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_subunit_name_is_an_error() {
        let content = r#"
            [[interactions]]
            subunit-one = "TP54"
        "#;
        match parse_batch(content, "inline", &target()) {
            Err(BatchLoadError::UnknownSubunit { name, target }) => {
                assert_eq!(name, "TP54");
                assert_eq!(target, "complex");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn copy_selection_is_keyed_by_subunit_id() {
        let content = r#"
            [copy-selection]
            TP53 = 0
            MDM2 = "x"
        "#;
        let batch = parse_batch(content, "inline", &target()).unwrap();
        let selection = batch.copy_selection.unwrap();
        assert_eq!(selection.get(&SubunitId(10)), Some(&Some(0)));
        assert_eq!(selection.get(&SubunitId(11)), Some(&None));
    }

    #[test]
    fn empty_document_is_an_empty_batch() {
        let batch = parse_batch("", "inline", &target()).unwrap();
        assert_eq!(batch, RegistrationBatch::default());
    }
}
