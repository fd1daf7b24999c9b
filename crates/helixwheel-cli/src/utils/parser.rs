use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceParseError {
    #[error("Sequence is empty. Provide at least one residue in one-letter code.")]
    Empty,

    #[error("Sequence contains non-letter character(s) {}. Only one-letter residue codes are accepted.", format_characters(.0))]
    InvalidCharacters(Vec<char>),
}

fn format_characters(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("'{}'", c.escape_default()))
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Validates a sequence typed on the command line.
///
/// Whitespace anywhere in the input is dropped so that sequences pasted from
/// FASTA-style blocks are accepted; everything else must be an ASCII letter.
pub fn parse_sequence(raw: &str) -> Result<String, SequenceParseError> {
    let sequence: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if sequence.is_empty() {
        return Err(SequenceParseError::Empty);
    }

    let mut invalid: Vec<char> = sequence
        .chars()
        .filter(|c| !c.is_ascii_alphabetic())
        .collect();
    if !invalid.is_empty() {
        invalid.sort_unstable();
        invalid.dedup();
        return Err(SequenceParseError::InvalidCharacters(invalid));
    }
    Ok(sequence)
}
