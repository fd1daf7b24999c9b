use phf::{Map, phf_map};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueCategory {
    Nonpolar, // Hydrophobic side chains
    Polar,    // Polar, uncharged
    Acidic,   // Negatively charged
    Basic,    // Positively charged
    Other,    // Non-standard or unknown codes
}

pub const CATEGORY_COUNT: usize = 5;

static STANDARD_RESIDUES: Map<char, ResidueCategory> = phf_map! {
    // --- Nonpolar ---
    'A' => ResidueCategory::Nonpolar, // Alanine
    'V' => ResidueCategory::Nonpolar, // Valine
    'L' => ResidueCategory::Nonpolar, // Leucine
    'I' => ResidueCategory::Nonpolar, // Isoleucine
    'M' => ResidueCategory::Nonpolar, // Methionine
    'F' => ResidueCategory::Nonpolar, // Phenylalanine
    'W' => ResidueCategory::Nonpolar, // Tryptophan
    'P' => ResidueCategory::Nonpolar, // Proline
    'G' => ResidueCategory::Nonpolar, // Glycine

    // --- Polar, Uncharged ---
    'S' => ResidueCategory::Polar, // Serine
    'T' => ResidueCategory::Polar, // Threonine
    'C' => ResidueCategory::Polar, // Cysteine
    'N' => ResidueCategory::Polar, // Asparagine
    'Q' => ResidueCategory::Polar, // Glutamine
    'Y' => ResidueCategory::Polar, // Tyrosine

    // --- Negatively Charged (Acidic) ---
    'D' => ResidueCategory::Acidic, // Aspartic Acid
    'E' => ResidueCategory::Acidic, // Glutamic Acid

    // --- Positively Charged (Basic) ---
    'K' => ResidueCategory::Basic, // Lysine
    'R' => ResidueCategory::Basic, // Arginine
    'H' => ResidueCategory::Basic, // Histidine
};

impl ResidueCategory {
    /// All categories, in the order they appear in legends.
    pub const ALL: [ResidueCategory; CATEGORY_COUNT] = [
        ResidueCategory::Nonpolar,
        ResidueCategory::Polar,
        ResidueCategory::Acidic,
        ResidueCategory::Basic,
        ResidueCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResidueCategory::Nonpolar => "Nonpolar",
            ResidueCategory::Polar => "Polar",
            ResidueCategory::Acidic => "Acidic",
            ResidueCategory::Basic => "Basic",
            ResidueCategory::Other => "Other",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a one-letter residue code, ignoring case.
///
/// Every character has a category: codes outside the 20 standard amino acids fall
/// back to [`ResidueCategory::Other`].
pub fn classify(code: char) -> ResidueCategory {
    STANDARD_RESIDUES
        .get(&code.to_ascii_uppercase())
        .copied()
        .unwrap_or(ResidueCategory::Other)
}

/// `true` for the 20 standard amino acid codes, ignoring case.
pub fn is_standard_residue(code: char) -> bool {
    STANDARD_RESIDUES.contains_key(&code.to_ascii_uppercase())
}
