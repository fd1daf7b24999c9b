//! # Workflows Module
//!
//! High-level entry points that run the whole helical wheel pipeline.
//!
//! - **Draw Workflow** ([`draw`]) - classify, place and render a sequence into an
//!   image file, returning the scene and its hydrophobicity profile.

pub mod draw;
