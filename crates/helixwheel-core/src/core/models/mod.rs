//! # Core Models Module
//!
//! Data structures describing a helical wheel, from the raw input sequence to the
//! fully placed and classified scene handed to the renderer.
//!
//! - [`sequence`] - Validated, immutable residue sequence
//! - [`residue`] - Side-chain chemical categories and the residue classifier
//! - [`palette`] - Fixed category to color table
//! - [`scene`] - Per-residue placements and the legend, ready for drawing
//!
//! ```ignore
//! use helixwheel::core::models::{palette::Palette, scene::WheelScene, sequence::Sequence};
//!
//! let sequence = Sequence::new("KLLKLLKKLLKLLK")?;
//! let scene = WheelScene::build(&sequence, 100.0, 1.0)?;
//! assert_eq!(scene.placements().len(), sequence.len());
//! ```

pub mod palette;
pub mod residue;
pub mod scene;
pub mod sequence;
