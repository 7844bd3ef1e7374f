//! Diagram styling
//!
//! The curve palette and the stroke/text settings handed to the renderer.

use crate::model::{Color, RadioBand};
use serde::{Deserialize, Serialize};

/// Curve colors in draw order, readable on the dark default background
pub const DEFAULT_CURVE_COLORS: [Color; 9] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::GRAY,
    Color::ORANGE,
    Color::CYAN,
    Color::BROWN,
    Color::PURPLE,
    Color::MAGENTA,
];

/// Visual settings for a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    /// Curve colors, cycled in draw order
    pub colors: Vec<Color>,
    pub background_color: Color,
    pub text_color: Color,
    pub font_family: String,
    pub title_font_size: f64,
    /// Tick and curve label size; the band's default when unset
    pub label_font_size: Option<f64>,
    pub curve_width: f64,
    /// Opacity of the area under a curve
    pub curve_fill_alpha: f64,
    pub axis_width: f64,
    pub gridline_width: f64,
    /// Gridline opacity relative to the text color
    pub gridline_alpha: f64,
    pub gridline_dash: Vec<f64>,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            colors: DEFAULT_CURVE_COLORS.to_vec(),
            background_color: Color::DARK_GRAY,
            text_color: Color::WHITE,
            font_family: "sans-serif".to_string(),
            title_font_size: 12.0,
            label_font_size: None,
            curve_width: 1.5,
            curve_fill_alpha: 0.2,
            axis_width: 1.0,
            gridline_width: 0.5,
            gridline_alpha: 0.5,
            gridline_dash: vec![3.0, 3.0],
        }
    }
}

impl DiagramStyle {
    /// Color for the curve at `index` in draw order
    pub fn curve_color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return self.text_color;
        }
        self.colors[index % self.colors.len()]
    }

    /// Label font size, falling back to the band's default
    pub fn label_font_size_for(&self, band: RadioBand) -> f64 {
        self.label_font_size
            .unwrap_or_else(|| band.default_label_font_size())
    }
}
