//! Map rendering settings.

use crate::{Color, Point, RenderError, RenderResult};

/// Canvas geometry, line and label styling, and the route palette.
///
/// ```json
/// {
///   "width": 1200.0, "height": 1200.0, "padding": 50.0,
///   "line_width": 14.0, "stop_radius": 5.0,
///   "bus_label_font_size": 20, "bus_label_offset": [7.0, 15.0],
///   "stop_label_font_size": 20, "stop_label_offset": [7.0, -3.0],
///   "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3.0,
///   "color_palette": ["green", [255, 160, 0], "red"]
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    pub width:                f64,
    pub height:               f64,
    pub padding:              f64,
    pub line_width:           f64,
    pub stop_radius:          f64,
    pub bus_label_font_size:  u32,
    pub bus_label_offset:     Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset:    Point,
    pub underlayer_color:     Color,
    pub underlayer_width:     f64,
    /// Route colours, cycled in bus name order.
    pub color_palette:        Vec<Color>,
}

impl RenderSettings {
    /// Check that sizes are finite and non-negative, the padding leaves a
    /// drawable area and the palette has at least one colour.
    pub fn validate(&self) -> RenderResult<()> {
        let sizes = [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("line_width", self.line_width),
            ("stop_radius", self.stop_radius),
            ("underlayer_width", self.underlayer_width),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(RenderError::InvalidValue { field, value });
            }
        }

        let side = self.width.min(self.height);
        if self.padding * 2.0 >= side {
            return Err(RenderError::PaddingTooLarge { padding: self.padding, side });
        }

        if self.color_palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(())
    }
}
