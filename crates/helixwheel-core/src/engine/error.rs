use super::config::ConfigError;
use crate::core::geometry::GeometryError;
use crate::core::models::sequence::SequenceError;
use crate::core::render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input validation failed: {0}")]
    InvalidSequence(#[from] SequenceError),

    #[error("Geometry generation failed: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] RenderError),
}

impl EngineError {
    /// `true` when the failure stems from the caller's input rather than the
    /// drawing or export step.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            EngineError::InvalidSequence(_)
            | EngineError::Geometry(_)
            | EngineError::Config(_) => true,
            EngineError::Rendering(RenderError::OutputNotWritable { .. })
            | EngineError::Rendering(RenderError::InvalidStyle(_)) => true,
            EngineError::Rendering(_) => false,
        }
    }
}
