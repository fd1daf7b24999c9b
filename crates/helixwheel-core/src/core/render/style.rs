use super::RenderError;

pub const DEFAULT_CANVAS_SIZE: u32 = 1000;
pub const DEFAULT_MARKER_SCALE: f64 = 0.14;

/// Visual parameters of a rendered wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub width: u32,
    pub height: u32,
    /// Marker radius as a fraction of the wheel radius.
    pub marker_scale: f64,
    pub title: Option<String>,
    pub show_labels: bool,
    pub show_numbers: bool,
    pub show_legend: bool,
    pub show_backbone: bool,
    pub fade_backbone: bool,
    pub show_moment: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            marker_scale: DEFAULT_MARKER_SCALE,
            title: None,
            show_labels: true,
            show_numbers: true,
            show_legend: true,
            show_backbone: true,
            fade_backbone: true,
            show_moment: false,
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidStyle(format!(
                "canvas must be at least 1x1 pixels (got {}x{})",
                self.width, self.height
            )));
        }
        if !self.marker_scale.is_finite() || self.marker_scale <= 0.0 || self.marker_scale >= 1.0 {
            return Err(RenderError::InvalidStyle(format!(
                "marker scale must lie in (0, 1) (got {})",
                self.marker_scale
            )));
        }
        Ok(())
    }

    /// Style without any text, for backends or environments lacking fonts.
    pub fn without_text(mut self) -> Self {
        self.title = None;
        self.show_labels = false;
        self.show_numbers = false;
        self.show_legend = false;
        self.show_moment = false;
        self
    }

    pub(crate) fn draws_text(&self) -> bool {
        self.title.is_some()
            || self.show_labels
            || self.show_numbers
            || self.show_legend
            || self.show_moment
    }
}
