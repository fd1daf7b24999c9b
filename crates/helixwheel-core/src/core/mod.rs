//! # Core Module
//!
//! Pure building blocks of a helical wheel projection.
//!
//! - **Models** ([`models`]) - Sequences, residue categories, the color palette and the
//!   renderable wheel scene
//! - **Geometry** ([`geometry`]) - Angular placement of residues on the wheel
//! - **Analysis** ([`analysis`]) - Mean hydrophobicity and hydrophobic moment of a helix
//! - **Rendering** ([`render`]) - Drawing a scene to PNG, JPEG, BMP or SVG
//!
//! Everything except [`render::render`] is free of side effects, so a scene can be built,
//! inspected and tested without touching the filesystem.

pub mod analysis;
pub mod geometry;
pub mod models;
pub mod render;
