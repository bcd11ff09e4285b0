use super::ids::SubunitId;
use serde::Serialize;

/// One side of a PTM: a residue on a specific copy of a subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BondEndpoint {
    pub subunit: SubunitId,
    pub copy: u32,    // 1..=subunit.copies
    pub residue: u32, // 1..=sequence length
}

impl BondEndpoint {
    pub fn new(subunit: SubunitId, copy: u32, residue: u32) -> Self {
        Self {
            subunit,
            copy,
            residue,
        }
    }
}

/// A fully specified PTM, built only once every draft field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PtmCandidate {
    pub one: BondEndpoint,
    pub two: BondEndpoint,
    pub bond_type: String,
}

/// Partially entered PTM. Every field is optional until the user fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PtmDraft {
    pub subunit_one: Option<SubunitId>,
    pub copy_one: Option<u32>,
    pub residue_one: Option<u32>,
    pub subunit_two: Option<SubunitId>,
    pub copy_two: Option<u32>,
    pub residue_two: Option<u32>,
    pub bond_type: Option<String>,
}

impl PtmDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint_one(mut self, subunit: SubunitId, copy: u32, residue: u32) -> Self {
        self.subunit_one = Some(subunit);
        self.copy_one = Some(copy);
        self.residue_one = Some(residue);
        self
    }

    pub fn endpoint_two(mut self, subunit: SubunitId, copy: u32, residue: u32) -> Self {
        self.subunit_two = Some(subunit);
        self.copy_two = Some(copy);
        self.residue_two = Some(residue);
        self
    }

    pub fn bond_type(mut self, bond_type: &str) -> Self {
        self.bond_type = Some(bond_type.to_string());
        self
    }

    /// Assembles the candidate when all seven fields are present.
    ///
    /// A bond type made only of whitespace counts as missing. Range checks are
    /// not performed here.
    pub fn candidate(&self) -> Option<PtmCandidate> {
        let bond_type = self.bond_type.as_deref().filter(|t| !t.trim().is_empty())?;
        Some(PtmCandidate {
            one: BondEndpoint::new(self.subunit_one?, self.copy_one?, self.residue_one?),
            two: BondEndpoint::new(self.subunit_two?, self.copy_two?, self.residue_two?),
            bond_type: bond_type.to_string(),
        })
    }
}

/// One side of a subunit interaction. Interactions bind whole copies, not residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InteractionEndpoint {
    pub subunit: SubunitId,
    pub copy: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionCandidate {
    pub one: InteractionEndpoint,
    pub two: InteractionEndpoint,
    pub interaction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionDraft {
    pub subunit_one: Option<SubunitId>,
    pub copy_one: Option<u32>,
    pub subunit_two: Option<SubunitId>,
    pub copy_two: Option<u32>,
    pub interaction: Option<String>,
}

impl InteractionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint_one(mut self, subunit: SubunitId, copy: u32) -> Self {
        self.subunit_one = Some(subunit);
        self.copy_one = Some(copy);
        self
    }

    pub fn endpoint_two(mut self, subunit: SubunitId, copy: u32) -> Self {
        self.subunit_two = Some(subunit);
        self.copy_two = Some(copy);
        self
    }

    pub fn interaction(mut self, label: &str) -> Self {
        self.interaction = Some(label.to_string());
        self
    }

    pub fn candidate(&self) -> Option<InteractionCandidate> {
        let interaction = self
            .interaction
            .as_deref()
            .filter(|t| !t.trim().is_empty())?;
        Some(InteractionCandidate {
            one: InteractionEndpoint {
                subunit: self.subunit_one?,
                copy: self.copy_one?,
            },
            two: InteractionEndpoint {
                subunit: self.subunit_two?,
                copy: self.copy_two?,
            },
            interaction: interaction.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_requires_every_field() {
        let full = PtmDraft::new()
            .endpoint_one(SubunitId(1), 1, 2)
            .endpoint_two(SubunitId(1), 2, 2)
            .bond_type("disulfide");
        assert!(full.candidate().is_some());

        let mut missing_residue = full.clone();
        missing_residue.residue_two = None;
        assert!(missing_residue.candidate().is_none());

        let mut missing_subunit = full.clone();
        missing_subunit.subunit_one = None;
        assert!(missing_subunit.candidate().is_none());
    }

    #[test]
    fn blank_bond_type_counts_as_missing() {
        let draft = PtmDraft::new()
            .endpoint_one(SubunitId(1), 1, 2)
            .endpoint_two(SubunitId(1), 2, 2)
            .bond_type("   ");
        assert!(draft.candidate().is_none());
    }

    #[test]
    fn interaction_candidate_requires_label() {
        let draft = InteractionDraft::new()
            .endpoint_one(SubunitId(1), 1)
            .endpoint_two(SubunitId(2), 1);
        assert!(draft.candidate().is_none());

        let labelled = draft.interaction("heterodimer");
        let candidate = labelled.candidate().unwrap();
        assert_eq!(candidate.one.subunit, SubunitId(1));
        assert_eq!(candidate.two.copy, 1);
        assert_eq!(candidate.interaction, "heterodimer");
    }
}
