//! Diagram layout calculations
//!
//! Layout runs in two phases. Every element (title, axes, gridlines,
//! labels, curves) is first placed relative to the plot's top-left corner
//! and scaled from plot units to pixels. The finished layout is then
//! translated once by the accumulated left/top chrome, so all elements
//! share exactly one transform.

use crate::band;
use crate::converter::ChannelCoordinateConverter;
use crate::diagram::WifiSignalDiagram;
use crate::model::*;
use serde::{Deserialize, Serialize};

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size centered horizontally on `center_x`
    pub fn centered_on(center_x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(center_x - width / 2.0, y, width, height)
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// A point in layout (pixel) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Target canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

/// Fixed sizes of everything around the plot area, in pixels unless noted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConstants {
    /// Margin between the canvas edge and the outermost element
    pub outer_margin: f64,
    /// Gap between adjacent chrome bands
    pub inner_margin: f64,
    /// Height of every text band (titles and tick labels)
    pub label_height: f64,
    /// Width of the y-axis tick label column
    pub y_axis_label_width: f64,
    /// Extra space between the title and the plot
    pub top_margin: f64,
    /// Width of an x tick label, in plot units
    pub x_label_width: f64,
    /// Width of a curve's SSID label, in plot units
    pub curve_label_width: f64,
    /// Height of a curve's SSID label
    pub curve_label_height: f64,
}

impl Default for ChromeConstants {
    fn default() -> Self {
        Self {
            outer_margin: 5.0,
            inner_margin: 2.0,
            label_height: 16.0,
            y_axis_label_width: 20.0,
            top_margin: 5.0,
            x_label_width: 30.0,
            curve_label_width: 50.0,
            curve_label_height: 15.0,
        }
    }
}

impl ChromeConstants {
    /// Outer margin, title band, inner margin and the extra top margin
    pub fn top_distance(&self) -> f64 {
        self.outer_margin + self.label_height + self.inner_margin + self.top_margin
    }

    /// Outer margin, y-axis title band, y-axis label column and two inner margins
    pub fn left_distance(&self) -> f64 {
        self.outer_margin
            + self.label_height
            + self.inner_margin
            + self.y_axis_label_width
            + self.inner_margin
    }

    /// Outer margin, x-axis title band, x-axis label band and two inner margins
    pub fn bottom_distance(&self) -> f64 {
        self.outer_margin
            + self.label_height
            + self.inner_margin
            + self.label_height
            + self.inner_margin
    }

    pub fn right_distance(&self) -> f64 {
        self.outer_margin
    }
}

/// Scale factors and offsets for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Pixels per horizontal plot unit
    pub x_scale: f64,
    /// Pixels per vertical plot unit
    pub y_scale: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub left_offset: f64,
    pub top_offset: f64,
}

impl LayoutMetrics {
    /// Derive scale factors from the canvas size.
    ///
    /// A canvas smaller than the chrome yields zero or negative scales;
    /// that is returned as-is.
    pub fn compute(
        canvas: CanvasSize,
        chrome: &ChromeConstants,
        max_x_index: u32,
        max_y_index: u32,
    ) -> Self {
        let plot_width = canvas.width - chrome.left_distance() - chrome.right_distance();
        let plot_height = canvas.height - chrome.top_distance() - chrome.bottom_distance();

        Self {
            x_scale: plot_width / max_x_index as f64,
            y_scale: plot_height / max_y_index as f64,
            plot_width,
            plot_height,
            left_offset: chrome.left_distance(),
            top_offset: chrome.top_distance(),
        }
    }

    /// Scale a plot-unit point, keeping the plot's top-left as origin
    pub fn scale(&self, point: PlotUnitPoint) -> LayoutPoint {
        LayoutPoint::new(point.x * self.x_scale, point.y * self.y_scale)
    }

    /// Scale and translate a plot-unit point into canvas coordinates
    pub fn to_canvas(&self, point: PlotUnitPoint) -> LayoutPoint {
        let mut scaled = self.scale(point);
        scaled.translate(self.left_offset, self.top_offset);
        scaled
    }
}

/// Shift geometry by a fixed offset
pub trait Translate {
    fn translate(&mut self, dx: f64, dy: f64);
}

impl Translate for LayoutPoint {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl Translate for LayoutRect {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl<T: Translate> Translate for Vec<T> {
    fn translate(&mut self, dx: f64, dy: f64) {
        for item in self.iter_mut() {
            item.translate(dx, dy);
        }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: LayoutPoint,
    pub end: LayoutPoint,
}

impl LineSegment {
    pub fn new(start: LayoutPoint, end: LayoutPoint) -> Self {
        Self { start, end }
    }
}

impl Translate for LineSegment {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.start.translate(dx, dy);
        self.end.translate(dx, dy);
    }
}

/// Direction text runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelOrientation {
    #[default]
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, reading bottom to top
    Vertical,
}

/// A text label and its bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub bounds: LayoutRect,
    pub text: String,
    pub orientation: LabelOrientation,
}

impl LabelLayout {
    pub fn new(bounds: LayoutRect, text: impl Into<String>) -> Self {
        Self {
            bounds,
            text: text.into(),
            orientation: LabelOrientation::Horizontal,
        }
    }

    pub fn vertical(bounds: LayoutRect, text: impl Into<String>) -> Self {
        Self {
            orientation: LabelOrientation::Vertical,
            ..Self::new(bounds, text)
        }
    }
}

impl Translate for LabelLayout {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.bounds.translate(dx, dy);
    }
}

/// One channel tick on the x-axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XTickLayout {
    pub channel: i32,
    pub tick: LineSegment,
    /// None for the gap channel
    pub label: Option<LabelLayout>,
}

impl Translate for XTickLayout {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.tick.translate(dx, dy);
        if let Some(label) = self.label.as_mut() {
            label.translate(dx, dy);
        }
    }
}

/// A network's curve in pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveLayout {
    pub ssid: String,
    pub start: LayoutPoint,
    pub mid: LayoutPoint,
    pub end: LayoutPoint,
    pub label: LabelLayout,
    pub color: Color,
}

impl CurveLayout {
    /// Horizontal share of the span that control points sit in from the edges
    pub const CONTROL_POINT_RATIO: f64 = 0.2;

    /// Control points of the two quadratic segments start->mid and mid->end.
    ///
    /// Both sit at the peak's height, pulled in from the edges by 20% of
    /// the curve's horizontal span.
    pub fn control_points(&self) -> (LayoutPoint, LayoutPoint) {
        let offset = (self.end.x - self.start.x) * Self::CONTROL_POINT_RATIO;
        (
            LayoutPoint::new(self.start.x + offset, self.mid.y),
            LayoutPoint::new(self.end.x - offset, self.mid.y),
        )
    }
}

impl Translate for CurveLayout {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.start.translate(dx, dy);
        self.mid.translate(dx, dy);
        self.end.translate(dx, dy);
        self.label.translate(dx, dy);
    }
}

/// Complete pixel layout of a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramLayout {
    /// Whole canvas; never translated
    pub canvas: LayoutRect,
    pub metrics: LayoutMetrics,
    pub plot_area: LayoutRect,
    pub title: LabelLayout,
    pub x_axis_title: LabelLayout,
    pub y_axis_title: LabelLayout,
    /// Dashed horizontal lines, bottom first
    pub gridlines: Vec<LineSegment>,
    pub x_ticks: Vec<XTickLayout>,
    /// Signal labels, top first
    pub y_labels: Vec<LabelLayout>,
    /// Curves in draw order, weakest signal first
    pub curves: Vec<CurveLayout>,
    /// Left and bottom axis as one polyline: top-left, origin, bottom-right
    pub axes: [LayoutPoint; 3],
}

impl Translate for DiagramLayout {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.plot_area.translate(dx, dy);
        self.title.translate(dx, dy);
        self.x_axis_title.translate(dx, dy);
        self.y_axis_title.translate(dx, dy);
        self.gridlines.translate(dx, dy);
        self.x_ticks.translate(dx, dy);
        self.y_labels.translate(dx, dy);
        self.curves.translate(dx, dy);
        for point in self.axes.iter_mut() {
            point.translate(dx, dy);
        }
    }
}

/// Layout calculator for Wi-Fi signal diagrams
#[derive(Debug, Clone, Default)]
pub struct DiagramLayoutCalculator {
    pub chrome: ChromeConstants,
}

impl DiagramLayoutCalculator {
    /// Create a new layout calculator
    pub fn new(chrome: ChromeConstants) -> Self {
        Self { chrome }
    }

    /// Calculate the complete layout for a diagram
    pub fn calculate(&self, diagram: &WifiSignalDiagram, canvas: CanvasSize) -> DiagramLayout {
        let band = diagram.band();
        let ceiling = diagram.ceiling();
        let max_x_index = band.max_x_index();
        let max_y_index = ceiling.max_index();
        let metrics = LayoutMetrics::compute(canvas, &self.chrome, max_x_index, max_y_index);

        tracing::debug!(
            band = %band,
            ceiling = ?ceiling,
            x_scale = metrics.x_scale,
            y_scale = metrics.y_scale,
            records = diagram.records().len(),
            "computing diagram layout"
        );

        // Everything below is placed with the plot's top-left at (0, 0)
        let plot = LayoutRect::new(0.0, 0.0, metrics.plot_width, metrics.plot_height);
        let chrome = &self.chrome;

        let title = LabelLayout::new(
            LayoutRect::new(
                0.0,
                -chrome.label_height - chrome.inner_margin - chrome.top_margin,
                plot.width,
                chrome.label_height,
            ),
            diagram.title(),
        );

        let x_axis_title = LabelLayout::new(
            LayoutRect::new(
                0.0,
                plot.bottom() + chrome.inner_margin + chrome.label_height + chrome.inner_margin,
                plot.width,
                chrome.label_height,
            ),
            diagram.x_axis_title(),
        );

        let y_axis_title = LabelLayout::vertical(
            LayoutRect::new(
                -chrome.inner_margin
                    - chrome.y_axis_label_width
                    - chrome.inner_margin
                    - chrome.label_height,
                0.0,
                chrome.label_height,
                plot.height,
            ),
            diagram.y_axis_title(),
        );

        let mut layout = DiagramLayout {
            canvas: LayoutRect::new(0.0, 0.0, canvas.width, canvas.height),
            metrics,
            plot_area: plot,
            title,
            x_axis_title,
            y_axis_title,
            gridlines: self.gridlines(&metrics, max_y_index),
            x_ticks: self.x_ticks(&metrics, band),
            y_labels: self.y_labels(&metrics, max_y_index),
            curves: self.curves(diagram, &metrics),
            axes: [
                LayoutPoint::new(plot.x, plot.y),
                LayoutPoint::new(plot.x, plot.bottom()),
                LayoutPoint::new(plot.right(), plot.bottom()),
            ],
        };

        layout.translate(metrics.left_offset, metrics.top_offset);
        layout
    }

    fn gridlines(&self, metrics: &LayoutMetrics, max_y_index: u32) -> Vec<LineSegment> {
        (0..=max_y_index)
            .rev()
            .map(|index| {
                let y = index as f64 * metrics.y_scale;
                LineSegment::new(LayoutPoint::new(0.0, y), LayoutPoint::new(metrics.plot_width, y))
            })
            .collect()
    }

    fn x_ticks(&self, metrics: &LayoutMetrics, band: RadioBand) -> Vec<XTickLayout> {
        let chrome = &self.chrome;
        let label_y = metrics.plot_height + chrome.inner_margin;
        let label_width = chrome.x_label_width * metrics.x_scale;

        band.channels()
            .into_iter()
            .map(|channel| {
                let x = band::center_position(channel, band) * metrics.x_scale;
                let tick = LineSegment::new(
                    LayoutPoint::new(x, metrics.plot_height),
                    LayoutPoint::new(x, metrics.plot_height + chrome.inner_margin),
                );
                let label = (channel != GAP_CHANNEL).then(|| {
                    LabelLayout::new(
                        LayoutRect::centered_on(x, label_y, label_width, chrome.label_height),
                        channel.to_string(),
                    )
                });
                XTickLayout { channel, tick, label }
            })
            .collect()
    }

    fn y_labels(&self, metrics: &LayoutMetrics, max_y_index: u32) -> Vec<LabelLayout> {
        let chrome = &self.chrome;
        let x = -chrome.inner_margin - chrome.y_axis_label_width;

        // Row k carries (k - 10) * 10 read from the top; the bottom row is left out
        (1..=max_y_index as i32)
            .rev()
            .enumerate()
            .map(|(row, index)| {
                let y = row as f64 * metrics.y_scale - chrome.label_height / 2.0;
                LabelLayout::new(
                    LayoutRect::new(x, y, chrome.y_axis_label_width, chrome.label_height),
                    ((index - 10) * 10).to_string(),
                )
            })
            .collect()
    }

    fn curves(&self, diagram: &WifiSignalDiagram, metrics: &LayoutMetrics) -> Vec<CurveLayout> {
        let chrome = &self.chrome;
        let converter = ChannelCoordinateConverter::new(diagram.band(), diagram.ceiling());
        let label_width = chrome.curve_label_width * metrics.x_scale;

        diagram
            .draw_order()
            .into_iter()
            .map(|(record, color)| {
                let curve = converter.curve_for(record);
                let mid = metrics.scale(curve.mid);
                let label = LabelLayout::new(
                    LayoutRect::centered_on(
                        mid.x,
                        mid.y - chrome.curve_label_height - chrome.inner_margin,
                        label_width,
                        chrome.curve_label_height,
                    ),
                    record.ssid.clone(),
                );
                CurveLayout {
                    ssid: record.ssid.clone(),
                    start: metrics.scale(curve.start),
                    mid,
                    end: metrics.scale(curve.end),
                    label,
                    color,
                }
            })
            .collect()
    }
}
