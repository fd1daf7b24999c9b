use crate::core::geometry::{self, ALPHA_HELIX_STEP_DEGREES, DEFAULT_RADIUS};
use crate::core::models::palette::{Palette, Rgb};
use crate::core::models::residue::ResidueCategory;
use crate::core::render::style::RenderStyle;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    pub step_degrees: f64,
    pub radius: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            step_degrees: ALPHA_HELIX_STEP_DEGREES,
            radius: DEFAULT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelConfig {
    pub geometry: GeometryConfig,
    pub style: RenderStyle,
    pub palette: Palette,
}

#[derive(Default)]
pub struct WheelConfigBuilder {
    step_degrees: Option<f64>,
    radius: Option<f64>,
    style: Option<RenderStyle>,
    colors: Vec<(ResidueCategory, Rgb)>,
}

impl WheelConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_degrees(mut self, step: f64) -> Self {
        self.step_degrees = Some(step);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.style = Some(style);
        self
    }
    pub fn color(mut self, category: ResidueCategory, color: Rgb) -> Self {
        self.colors.push((category, color));
        self
    }

    pub fn build(self) -> Result<WheelConfig, ConfigError> {
        let defaults = GeometryConfig::default();
        let geometry = GeometryConfig {
            step_degrees: self.step_degrees.unwrap_or(defaults.step_degrees),
            radius: self.radius.unwrap_or(defaults.radius),
        };
        geometry::validate_parameters(geometry.step_degrees, geometry.radius).map_err(|e| {
            let parameter = match e {
                geometry::GeometryError::InvalidRadius(_) => "radius",
                _ => "step-degrees",
            };
            ConfigError::InvalidParameter {
                parameter,
                reason: e.to_string(),
            }
        })?;

        let style = self.style.unwrap_or_default();
        style.validate().map_err(|e| ConfigError::InvalidParameter {
            parameter: "render",
            reason: e.to_string(),
        })?;

        let palette = self
            .colors
            .into_iter()
            .fold(Palette::default(), |palette, (category, color)| {
                palette.with_color(category, color)
            });

        Ok(WheelConfig {
            geometry,
            style,
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_alpha_helix_defaults() {
        let config = WheelConfigBuilder::new().build().unwrap();
        assert_eq!(config.geometry.step_degrees, 100.0);
        assert_eq!(config.geometry.radius, 1.0);
        assert_eq!(config.style, RenderStyle::default());
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn build_applies_explicit_values() {
        let style = RenderStyle {
            width: 600,
            height: 400,
            ..RenderStyle::default()
        };
        let config = WheelConfigBuilder::new()
            .step_degrees(160.0)
            .radius(2.5)
            .style(style.clone())
            .color(ResidueCategory::Other, Rgb::new(255, 165, 0))
            .build()
            .unwrap();

        assert_eq!(config.geometry.step_degrees, 160.0);
        assert_eq!(config.geometry.radius, 2.5);
        assert_eq!(config.style, style);
        assert_eq!(
            config.palette.color(ResidueCategory::Other),
            Rgb::new(255, 165, 0)
        );
    }

    #[test]
    fn build_rejects_non_positive_step_and_radius() {
        let err = WheelConfigBuilder::new().step_degrees(0.0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "step-degrees",
                ..
            }
        ));

        let err = WheelConfigBuilder::new().radius(-1.0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "radius",
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_invalid_style() {
        let style = RenderStyle {
            marker_scale: 2.0,
            ..RenderStyle::default()
        };
        let err = WheelConfigBuilder::new().style(style).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "render",
                ..
            }
        ));
    }

    #[test]
    fn later_color_overrides_win() {
        let config = WheelConfigBuilder::new()
            .color(ResidueCategory::Basic, Rgb::new(0, 0, 255))
            .color(ResidueCategory::Basic, Rgb::new(0, 0, 128))
            .build()
            .unwrap();
        assert_eq!(
            config.palette.color(ResidueCategory::Basic),
            Rgb::new(0, 0, 128)
        );
    }
}
