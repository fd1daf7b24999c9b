use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
}

/// An ordered, non-empty run of one-letter residue codes.
///
/// Codes are kept exactly as supplied (minus surrounding whitespace); unknown
/// characters are allowed and are classified as `Other` downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    residues: Vec<char>,
}

impl Sequence {
    pub fn new(raw: &str) -> Result<Self, SequenceError> {
        let residues: Vec<char> = raw.trim().chars().collect();
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    // Construction guarantees at least one residue.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.residues.iter().copied()
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}
