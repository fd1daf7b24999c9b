use super::residue::{CATEGORY_COUNT, ResidueCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ColorParseError {
    #[error("Invalid color '{0}'. Expected a hex triplet such as '#ffd700'.")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed mapping from residue category to display color.
///
/// Built once and shared read-only between scene construction and rendering, so two
/// residues of the same category always render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; CATEGORY_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Rgb::new(255, 215, 0),   // gold
                Rgb::new(128, 128, 128), // gray
                Rgb::new(139, 0, 0),     // darkred
                Rgb::new(70, 130, 180),  // steelblue
                Rgb::new(255, 255, 255), // white
            ],
        }
    }
}

impl Palette {
    pub fn color(&self, category: ResidueCategory) -> Rgb {
        self.colors[category.index()]
    }

    pub fn with_color(mut self, category: ResidueCategory, color: Rgb) -> Self {
        self.colors[category.index()] = color;
        self
    }
}
