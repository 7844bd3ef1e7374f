//! Wifi Diagram - Geometry engine for Wi-Fi signal diagrams
//!
//! This crate provides support for:
//! - Mapping 2.4 GHz and 5 GHz channels onto a shared horizontal axis
//! - Mapping signal strength in dBm onto the vertical axis
//! - Converting network records into three-point curve geometry
//! - Laying out the diagram chrome and curves for a canvas size
//! - Parsing network records from text
//! - Rendering layouts to primitives or SVG

pub mod band;
pub mod signal;
mod model;
mod error;
mod converter;
mod layout;
mod record;
mod styles;
mod diagram;
mod render;

pub use band::{ChannelBounds, bounds, center_position};
pub use signal::y_position;
pub use model::*;
pub use error::*;
pub use converter::*;
pub use layout::*;
pub use record::*;
pub use styles::*;
pub use diagram::*;
pub use render::*;
