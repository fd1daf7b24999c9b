//! # helixwheel
//!
//! Helical wheel projections of peptide sequences. A helical wheel places every residue
//! of a sequence on a circle, rotated by a fixed step per residue (100° for an
//! alpha-helix), and colors it by side-chain chemistry so that hydrophobic and polar
//! faces of an amphipathic helix become visible at a glance.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless models (`Sequence`, `ResidueCategory`,
//!   `Palette`, `WheelScene`), the pure geometry generator, hydrophobicity analysis and
//!   the plotters-based renderer.
//!
//! - **[`engine`]: Configuration and Errors.** Validated wheel and render configuration
//!   built through a builder, and the error taxonomy shared by every stage.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   call that turns a sequence into an image file.

pub mod core;
pub mod engine;
pub mod workflows;
