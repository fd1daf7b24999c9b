use helixwheel::core::geometry::{ALPHA_HELIX_STEP_DEGREES, DEFAULT_RADIUS};
use helixwheel::core::render::style::{DEFAULT_CANVAS_SIZE, DEFAULT_MARKER_SCALE};

pub struct DefaultsConfig {
    pub step_degrees: f64,
    pub radius: f64,
    pub width: u32,
    pub height: u32,
    pub marker_scale: f64,
    pub show_labels: bool,
    pub show_numbers: bool,
    pub show_legend: bool,
    pub show_backbone: bool,
    pub fade_backbone: bool,
    pub show_moment: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            step_degrees: ALPHA_HELIX_STEP_DEGREES,
            radius: DEFAULT_RADIUS,
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            marker_scale: DEFAULT_MARKER_SCALE,
            show_labels: true,
            show_numbers: true,
            show_legend: true,
            show_backbone: true,
            fade_backbone: true,
            show_moment: false,
        }
    }
}
