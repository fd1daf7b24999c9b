use super::palette::{Palette, Rgb};
use super::residue::{ResidueCategory, classify};
use super::sequence::Sequence;
use crate::core::geometry::{self, GeometryError};
use nalgebra::Point2;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ResiduePlacement {
    pub index: usize,
    pub code: char,
    pub angle: f64, // radians, [0, 2π)
    pub position: Point2<f64>,
    pub category: ResidueCategory,
}

impl ResiduePlacement {
    /// One-based residue number, as printed on the wheel.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn label(&self) -> char {
        self.code.to_ascii_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub category: ResidueCategory,
    pub color: Rgb,
}

/// Everything needed to draw one helical wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScene {
    placements: Vec<ResiduePlacement>,
    categories: BTreeSet<ResidueCategory>,
    step_degrees: f64,
    radius: f64,
}

impl WheelScene {
    pub fn build(
        sequence: &Sequence,
        step_degrees: f64,
        radius: f64,
    ) -> Result<Self, GeometryError> {
        let points = geometry::generate(sequence.len(), step_degrees, radius)?;

        let placements: Vec<ResiduePlacement> = sequence
            .iter()
            .zip(points)
            .enumerate()
            .map(|(index, (code, point))| ResiduePlacement {
                index,
                code,
                angle: point.angle,
                position: point.position,
                category: classify(code),
            })
            .collect();
        let categories = placements.iter().map(|p| p.category).collect();

        Ok(Self {
            placements,
            categories,
            step_degrees,
            radius,
        })
    }

    pub fn placements(&self) -> &[ResiduePlacement] {
        &self.placements
    }

    pub fn step_degrees(&self) -> f64 {
        self.step_degrees
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn categories(&self) -> impl Iterator<Item = ResidueCategory> + '_ {
        self.categories.iter().copied()
    }

    /// Legend rows for the categories present in the sequence, in display order.
    pub fn legend(&self, palette: &Palette) -> Vec<LegendEntry> {
        self.categories()
            .map(|category| LegendEntry {
                category,
                color: palette.color(category),
            })
            .collect()
    }

    /// Backbone edges between consecutive residues. The last residue is not joined
    /// back to the first.
    pub fn backbone(&self) -> impl Iterator<Item = (&ResiduePlacement, &ResiduePlacement)> + '_ {
        self.placements.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
