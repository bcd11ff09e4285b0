use super::ids::SubunitId;
use super::residue::AminoAcid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Gene {
    pub dna_fasta_description: String,
    pub dna_sequence: String,
}

impl Gene {
    pub fn new(description: &str, sequence: &str) -> Self {
        Self {
            dna_fasta_description: description.to_string(),
            dna_sequence: sequence.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Subunit {
    pub id: SubunitId,
    pub name: String,
    pub copies: u32,                    // Number of molecule instances in the target
    pub amino_acid_sequence: String,    // One-letter residue codes, displayed 1-indexed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amino_acid_fasta_description: Option<String>,
    #[serde(default)]
    pub genes: Vec<Gene>,
}

impl Subunit {
    pub fn new(id: SubunitId, name: &str, amino_acid_sequence: &str, copies: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            copies,
            amino_acid_sequence: amino_acid_sequence.to_string(),
            amino_acid_fasta_description: None,
            genes: Vec::new(),
        }
    }

    pub fn with_genes(mut self, genes: Vec<Gene>) -> Self {
        self.genes = genes;
        self
    }

    pub fn residue_count(&self) -> usize {
        self.amino_acid_sequence.chars().count()
    }

    /// Returns the residue letter at a 1-indexed position, as typed in the sequence.
    pub fn residue_at(&self, residue_number: u32) -> Option<char> {
        let index = usize::try_from(residue_number).ok()?.checked_sub(1)?;
        self.amino_acid_sequence.chars().nth(index)
    }

    pub fn amino_acid_at(&self, residue_number: u32) -> Option<AminoAcid> {
        self.residue_at(residue_number).and_then(AminoAcid::from_code)
    }

    pub fn gene_descriptions(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(|g| g.dna_fasta_description.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Target {
    pub target_name: String,
    #[serde(default)]
    pub partner: String,
    #[serde(default)]
    pub protein_class: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub notes: String,
    pub subunits: Vec<Subunit>,
}

impl Target {
    pub fn subunit(&self, id: SubunitId) -> Option<&Subunit> {
        self.subunits.iter().find(|s| s.id == id)
    }

    pub fn subunit_by_name(&self, name: &str) -> Option<&Subunit> {
        self.subunits.iter().find(|s| s.name == name)
    }
}
