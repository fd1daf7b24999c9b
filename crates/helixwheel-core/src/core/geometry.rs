use nalgebra::Point2;
use thiserror::Error;

/// Rotation per residue of an ideal alpha-helix (3.6 residues per turn).
pub const ALPHA_HELIX_STEP_DEGREES: f64 = 100.0;

pub const DEFAULT_RADIUS: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GeometryError {
    #[error("Sequence length must be at least 1")]
    EmptySequence,

    #[error("Angular step must be a positive, finite number of degrees (got {0})")]
    InvalidStep(f64),

    #[error("Wheel radius must be a positive, finite number (got {0})")]
    InvalidRadius(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPoint {
    /// Angle in radians, always within `[0, 2π)`.
    pub angle: f64,
    pub position: Point2<f64>,
}

impl WheelPoint {
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

pub fn validate_parameters(step_degrees: f64, radius: f64) -> Result<(), GeometryError> {
    if !step_degrees.is_finite() || step_degrees <= 0.0 {
        return Err(GeometryError::InvalidStep(step_degrees));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }
    Ok(())
}

/// Angle of residue `index` in degrees, reduced into `[0, 360)`.
///
/// The step is reduced before multiplying so the product stays finite for any
/// finite step.
pub fn residue_angle_degrees(index: usize, step_degrees: f64) -> f64 {
    (index as f64 * step_degrees.rem_euclid(360.0)).rem_euclid(360.0)
}

/// Places `sequence_length` residues on a circle of `radius`, each rotated by
/// `step_degrees` from the previous one. Entry `i` belongs to residue `i`.
pub fn generate(
    sequence_length: usize,
    step_degrees: f64,
    radius: f64,
) -> Result<Vec<WheelPoint>, GeometryError> {
    if sequence_length == 0 {
        return Err(GeometryError::EmptySequence);
    }
    validate_parameters(step_degrees, radius)?;

    Ok((0..sequence_length)
        .map(|i| {
            let angle = residue_angle_degrees(i, step_degrees).to_radians();
            WheelPoint {
                angle,
                position: Point2::new(radius * angle.cos(), radius * angle.sin()),
            }
        })
        .collect())
}
