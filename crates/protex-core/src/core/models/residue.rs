use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Histidine, // H
    Lysine,    // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

#[rustfmt::skip]
static ONE_LETTER_CODES: Map<char, AminoAcid> = phf_map! {
    'A' => AminoAcid::Alanine,    'G' => AminoAcid::Glycine,
    'I' => AminoAcid::Isoleucine, 'L' => AminoAcid::Leucine,
    'P' => AminoAcid::Proline,    'V' => AminoAcid::Valine,
    'F' => AminoAcid::Phenylalanine,
    'W' => AminoAcid::Tryptophan, 'Y' => AminoAcid::Tyrosine,
    'N' => AminoAcid::Asparagine, 'C' => AminoAcid::Cysteine,
    'Q' => AminoAcid::Glutamine,  'S' => AminoAcid::Serine,
    'T' => AminoAcid::Threonine,  'M' => AminoAcid::Methionine,
    'R' => AminoAcid::Arginine,   'H' => AminoAcid::Histidine,
    'K' => AminoAcid::Lysine,
    'D' => AminoAcid::AsparticAcid,
    'E' => AminoAcid::GlutamicAcid,
};

impl AminoAcid {
    /// Looks up a residue letter, ignoring case.
    ///
    /// Ambiguity codes (`B`, `Z`, `X`) and anything else outside the twenty
    /// standard residues yield `None`.
    pub fn from_code(code: char) -> Option<Self> {
        ONE_LETTER_CODES.get(&code.to_ascii_uppercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(AminoAcid::from_code('C'), Some(AminoAcid::Cysteine));
        assert_eq!(AminoAcid::from_code('c'), Some(AminoAcid::Cysteine));
        assert_eq!(AminoAcid::from_code('m'), Some(AminoAcid::Methionine));
    }

    #[test]
    fn from_code_rejects_ambiguity_codes() {
        assert_eq!(AminoAcid::from_code('X'), None);
        assert_eq!(AminoAcid::from_code('B'), None);
        assert_eq!(AminoAcid::from_code('*'), None);
    }

    #[test]
    fn lookup_table_covers_the_twenty_standard_residues() {
        assert_eq!(ONE_LETTER_CODES.len(), 20);
        for code in "ACDEFGHIKLMNPQRSTVWY".chars() {
            assert!(AminoAcid::from_code(code).is_some(), "{code}");
        }
    }
}
