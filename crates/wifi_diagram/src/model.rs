//! Diagram model types
//!
//! This module defines the configuration enums (radio band, axis ceiling),
//! the network records that feed the diagram, and the plot-unit geometry
//! produced for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic 5 GHz channel used only to draw a break between the low
/// (36-64) and high (100-165) sub-bands.
pub const GAP_CHANNEL: i32 = -1;

/// Real 5 GHz channel numbers accepted for records
const FIVE_GHZ_CHANNELS: [i32; 25] = [
    36, 40, 44, 48, 52, 56, 60, 64, // UNII-1, UNII-2
    100, 104, 108, 112, 116, 120, 124, 128, 132, 136, 140, 144, // UNII-2e
    149, 153, 157, 161, 165, // UNII-3
];

/// Channels labelled on the 5 GHz x-axis, in drawing order
const FIVE_GHZ_AXIS_CHANNELS: [i32; 14] = [
    36, 40, 44, 48, 52, 56, 60, 64, GAP_CHANNEL, 100, 116, 132, 149, 165,
];

/// Radio band shown by a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RadioBand {
    /// 2.4 GHz, channels 1-14
    #[default]
    #[serde(rename = "2.4ghz")]
    TwoPointFourGHz,
    /// 5 GHz, channels 36-165
    #[serde(rename = "5ghz")]
    FiveGHz,
}

impl RadioBand {
    /// Channels drawn as x-axis ticks, including the gap channel for 5 GHz
    pub fn channels(&self) -> Vec<i32> {
        match self {
            RadioBand::TwoPointFourGHz => (1..=14).collect(),
            RadioBand::FiveGHz => FIVE_GHZ_AXIS_CHANNELS.to_vec(),
        }
    }

    /// Whether `channel` belongs to this band's valid channel set
    pub fn is_valid_channel(&self, channel: i32) -> bool {
        match self {
            RadioBand::TwoPointFourGHz => (1..=14).contains(&channel),
            RadioBand::FiveGHz => {
                channel == GAP_CHANNEL || FIVE_GHZ_CHANNELS.contains(&channel)
            }
        }
    }

    /// x-axis total index plus margin
    pub fn max_x_index(&self) -> u32 {
        match self {
            RadioBand::TwoPointFourGHz => 95 + 5,
            RadioBand::FiveGHz => 130 + 5,
        }
    }

    /// Default diagram title
    pub fn diagram_title(&self) -> String {
        format!("Wifi Signal Diagram ({})", self)
    }

    /// Default font size for tick and curve labels
    pub fn default_label_font_size(&self) -> f64 {
        match self {
            RadioBand::TwoPointFourGHz => 12.0,
            RadioBand::FiveGHz => 11.0,
        }
    }
}

impl fmt::Display for RadioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioBand::TwoPointFourGHz => write!(f, "2.4GHz"),
            RadioBand::FiveGHz => write!(f, "5GHz"),
        }
    }
}

/// Topmost signal strength shown on the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisCeiling {
    /// 0 to -100 dBm
    #[default]
    Zero,
    /// -10 to -100 dBm
    NegativeTen,
    /// -20 to -100 dBm
    NegativeTwenty,
}

impl AxisCeiling {
    /// Number of gridline rows; also the y of the zero-signal baseline
    pub fn max_index(&self) -> u32 {
        match self {
            AxisCeiling::Zero => 10,
            AxisCeiling::NegativeTen => 9,
            AxisCeiling::NegativeTwenty => 8,
        }
    }

    /// Amount of dBm cut off above the ceiling
    pub fn offset(&self) -> f64 {
        match self {
            AxisCeiling::Zero => 0.0,
            AxisCeiling::NegativeTen => 10.0,
            AxisCeiling::NegativeTwenty => 20.0,
        }
    }

    /// Signal strength at the top of the axis, in dBm
    pub fn top_value(&self) -> i32 {
        -(self.offset() as i32)
    }

    /// Labels from the ceiling downwards; -100 is left out
    pub fn displayed_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = (0..=self.max_index() as i32)
            .map(|i| (i * -10 + self.top_value()).to_string())
            .collect();
        numbers.pop();
        numbers
    }
}

/// One observed network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub ssid: String,
    pub channel: i32,
    pub signal_dbm: f64,
    pub bandwidth_mhz: f64,
}

impl NetworkRecord {
    /// Bandwidth assumed when a record does not state one
    pub const DEFAULT_BANDWIDTH_MHZ: f64 = 20.0;

    /// Create a new record
    pub fn new(ssid: impl Into<String>, channel: i32, signal_dbm: f64, bandwidth_mhz: f64) -> Self {
        Self {
            ssid: ssid.into(),
            channel,
            signal_dbm,
            bandwidth_mhz,
        }
    }
}

/// A point in abstract plot units (not pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotUnitPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotUnitPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The three anchor points of one network's occupancy curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometry {
    /// Left edge, on the baseline
    pub start: PlotUnitPoint,
    /// Peak at the channel center
    pub mid: PlotUnitPoint,
    /// Right edge, on the baseline
    pub end: PlotUnitPoint,
}

impl fmt::Display for CurveGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start: ({}, {}), mid: ({}, {}), end: ({}, {})",
            self.start.x, self.start.y, self.mid.x, self.mid.y, self.end.x, self.end.y
        )
    }
}

/// RGBA color, serialized as a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(85, 85, 85);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BROWN: Color = Color::rgb(153, 102, 51);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    /// Create a new color from RGB values (fully opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha channel replaced
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF000080")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Convert to hex string with # prefix; alpha only when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color: {}", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
