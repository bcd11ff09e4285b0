use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A named structural violation. The tag is what entry forms key their messages on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Violation {
    ResidueOneCysteine,
    ResidueTwoCysteine,
    DistinctBondPoints,
    NotAllZero,
}

impl Violation {
    pub fn tag(self) -> &'static str {
        match self {
            Violation::ResidueOneCysteine => "residueOneCysteine",
            Violation::ResidueTwoCysteine => "residueTwoCysteine",
            Violation::DistinctBondPoints => "distinctBondPoints",
            Violation::NotAllZero => "notAllZero",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Violation::ResidueOneCysteine => "The first bond residue must be a cysteine.",
            Violation::ResidueTwoCysteine => "The second bond residue must be a cysteine.",
            Violation::DistinctBondPoints => "The two bond points must be distinct.",
            Violation::NotAllZero => "At least one subunit must have a non-zero copy count.",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accumulated violations. Serializes to a `{ tag: true }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationSet(BTreeSet<Violation>);

impl ViolationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, violation: Violation) {
        self.0.insert(violation);
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        self.0.iter().copied()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.iter().map(Violation::tag).collect()
    }
}

impl FromIterator<Violation> for ViolationSet {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ViolationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for violation in &self.0 {
            map.serialize_entry(violation.tag(), &true)?;
        }
        map.end()
    }
}

/// Result of validating one draft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "lowercase")]
pub enum Outcome {
    /// Inputs are incomplete or individually invalid; no verdict yet.
    Deferred,
    Invalid(ViolationSet),
    Valid,
}

impl Outcome {
    pub fn from_violations(violations: ViolationSet) -> Self {
        if violations.is_empty() {
            Outcome::Valid
        } else {
            Outcome::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Outcome::Deferred)
    }

    pub fn violations(&self) -> Option<&ViolationSet> {
        match self {
            Outcome::Invalid(v) => Some(v),
            _ => None,
        }
    }
}
