//! Diagram configuration and the diagram instance
//!
//! A `WifiSignalDiagram` owns its configuration and a copy of the records.
//! Neither changes after construction; every layout pass derives fresh
//! geometry from them.

use crate::converter::ChannelCoordinateConverter;
use crate::error::{DiagramError, Result};
use crate::layout::*;
use crate::model::*;
use crate::render::{DiagramRenderer, RenderedDiagram};
use crate::styles::DiagramStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default x-axis title
pub const DEFAULT_X_AXIS_TITLE: &str = "Wifi Channels";
/// Default y-axis title
pub const DEFAULT_Y_AXIS_TITLE: &str = "Signal Strength [dBm]";

/// Everything that configures a diagram apart from its records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub band: RadioBand,
    pub ceiling: AxisCeiling,
    /// Diagram title; the band's default when unset
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub style: DiagramStyle,
    pub chrome: ChromeConstants,
}

impl DiagramConfig {
    /// Create a config for a band and ceiling with default styling
    pub fn new(band: RadioBand, ceiling: AxisCeiling) -> Self {
        Self {
            band,
            ceiling,
            ..Default::default()
        }
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DiagramConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load a config file, or return defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load diagram config {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// Serialize the config to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject sizes that cannot produce a sensible drawing
    pub fn validate(&self) -> Result<()> {
        let chrome = &self.chrome;
        let sizes = [
            ("outer_margin", chrome.outer_margin),
            ("inner_margin", chrome.inner_margin),
            ("label_height", chrome.label_height),
            ("y_axis_label_width", chrome.y_axis_label_width),
            ("top_margin", chrome.top_margin),
            ("x_label_width", chrome.x_label_width),
            ("curve_label_width", chrome.curve_label_width),
            ("curve_label_height", chrome.curve_label_height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let style = &self.style;
        let strokes = [
            ("curve_width", style.curve_width),
            ("axis_width", style.axis_width),
            ("gridline_width", style.gridline_width),
        ];
        let dash = style.gridline_dash.iter().map(|&value| ("gridline_dash", value));
        for (name, value) in strokes.into_iter().chain(dash) {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if style.title_font_size <= 0.0 || style.label_font_size.is_some_and(|size| size <= 0.0) {
            return Err(DiagramError::InvalidConfig(
                "font sizes must be positive".to_string(),
            ));
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&style.curve_fill_alpha) || !unit.contains(&style.gridline_alpha) {
            return Err(DiagramError::InvalidConfig(
                "alpha values must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A Wi-Fi signal diagram for one band
#[derive(Debug, Clone)]
pub struct WifiSignalDiagram {
    config: DiagramConfig,
    records: Vec<NetworkRecord>,
}

impl WifiSignalDiagram {
    /// Create a diagram. The records are copied; the caller keeps its list.
    pub fn new(config: DiagramConfig, records: &[NetworkRecord]) -> Self {
        Self {
            config,
            records: records.to_vec(),
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn band(&self) -> RadioBand {
        self.config.band
    }

    pub fn ceiling(&self) -> AxisCeiling {
        self.config.ceiling
    }

    pub fn style(&self) -> &DiagramStyle {
        &self.config.style
    }

    /// Records in the order they were given
    pub fn records(&self) -> &[NetworkRecord] {
        &self.records
    }

    pub fn title(&self) -> String {
        self.config
            .title
            .clone()
            .unwrap_or_else(|| self.band().diagram_title())
    }

    pub fn x_axis_title(&self) -> String {
        self.config
            .x_axis_title
            .clone()
            .unwrap_or_else(|| DEFAULT_X_AXIS_TITLE.to_string())
    }

    pub fn y_axis_title(&self) -> String {
        self.config
            .y_axis_title
            .clone()
            .unwrap_or_else(|| DEFAULT_Y_AXIS_TITLE.to_string())
    }

    /// Records sorted weakest to strongest with their curve colors.
    ///
    /// Stronger networks are drawn later and end up on top.
    pub fn draw_order(&self) -> Vec<(&NetworkRecord, Color)> {
        let mut sorted: Vec<&NetworkRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.signal_dbm.total_cmp(&b.signal_dbm));
        sorted
            .into_iter()
            .enumerate()
            .map(|(index, record)| (record, self.config.style.curve_color(index)))
            .collect()
    }

    /// Plot-unit curve geometry for every record, in input order
    pub fn curves(&self) -> Vec<CurveGeometry> {
        let converter = ChannelCoordinateConverter::new(self.band(), self.ceiling());
        self.records.iter().map(|r| converter.curve_for(r)).collect()
    }

    /// Pixel layout for a canvas
    pub fn layout(&self, canvas: CanvasSize) -> DiagramLayout {
        DiagramLayoutCalculator::new(self.config.chrome).calculate(self, canvas)
    }

    /// Lay out and render to primitives
    pub fn render(&self, canvas: CanvasSize) -> RenderedDiagram {
        let layout = self.layout(canvas);
        DiagramRenderer::new(self.band(), self.style()).render(&layout)
    }

    /// Lay out and render to an SVG document
    pub fn render_svg(&self, canvas: CanvasSize) -> String {
        let rendered = self.render(canvas);
        DiagramRenderer::new(self.band(), self.style()).to_svg(&rendered)
    }
}
