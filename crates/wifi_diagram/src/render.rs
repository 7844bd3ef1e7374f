//! Diagram rendering
//!
//! Turns a `DiagramLayout` into render primitives and serializes them to
//! SVG. Curves are drawn as two quadratic segments through the start, peak
//! and end points.

use crate::layout::*;
use crate::model::{Color, RadioBand};
use crate::styles::DiagramStyle;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A render primitive for diagram elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderPrimitive {
    /// A filled rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    /// A straight line, optionally dashed
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
        dash: Option<Vec<f64>>,
    },
    /// Connected line segments
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
    },
    /// Text centered on (x, y), rotated by `rotation` degrees around that point
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        font_family: String,
        fill: String,
        rotation: f64,
    },
    /// A path (SVG path data)
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: Option<f64>,
    },
}

/// Rendered diagram output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDiagram {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<RenderPrimitive>,
}

/// Diagram renderer
pub struct DiagramRenderer {
    style: DiagramStyle,
    label_font_size: f64,
}

impl DiagramRenderer {
    /// Create a renderer for a band's diagram with the given style
    pub fn new(band: RadioBand, style: &DiagramStyle) -> Self {
        Self {
            label_font_size: style.label_font_size_for(band),
            style: style.clone(),
        }
    }

    /// Render a layout to primitives
    pub fn render(&self, layout: &DiagramLayout) -> RenderedDiagram {
        let mut primitives = Vec::new();

        primitives.push(RenderPrimitive::Rect {
            x: layout.canvas.x,
            y: layout.canvas.y,
            width: layout.canvas.width,
            height: layout.canvas.height,
            fill: self.style.background_color.to_css(),
        });

        self.render_title(&mut primitives, &layout.title);
        self.render_x_ticks(&mut primitives, layout);
        self.render_y_labels(&mut primitives, layout);
        self.render_gridlines(&mut primitives, layout);
        self.render_title(&mut primitives, &layout.x_axis_title);
        self.render_title(&mut primitives, &layout.y_axis_title);
        self.render_curves(&mut primitives, layout);

        // Axes go last so curves never cover them
        primitives.push(RenderPrimitive::Polyline {
            points: layout.axes.iter().map(|p| (p.x, p.y)).collect(),
            stroke: self.style.text_color.to_css(),
            stroke_width: self.style.axis_width,
        });

        tracing::debug!(primitives = primitives.len(), "rendered diagram");

        RenderedDiagram {
            width: layout.canvas.width,
            height: layout.canvas.height,
            primitives,
        }
    }

    /// Render a layout straight to an SVG string
    pub fn render_svg(&self, layout: &DiagramLayout) -> String {
        let rendered = self.render(layout);
        self.to_svg(&rendered)
    }

    /// Convert rendered output to an SVG string
    pub fn to_svg(&self, rendered: &RenderedDiagram) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            rendered.width, rendered.height, rendered.width, rendered.height
        );
        svg.push('\n');

        for primitive in &rendered.primitives {
            svg.push_str(&self.primitive_to_svg(primitive));
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }

    fn primitive_to_svg(&self, primitive: &RenderPrimitive) -> String {
        match primitive {
            RenderPrimitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                x, y, width, height, fill
            ),
            RenderPrimitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
                dash,
            } => {
                let mut attrs = format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                    x1, y1, x2, y2, stroke, stroke_width
                );
                if let Some(dash) = dash {
                    let pattern: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
                    let _ = write!(attrs, r#" stroke-dasharray="{}""#, pattern.join(","));
                }
                attrs.push_str("/>");
                attrs
            }
            RenderPrimitive::Polyline {
                points,
                stroke,
                stroke_width,
            } => {
                let points_str: String = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polyline points="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
                    points_str, stroke, stroke_width
                )
            }
            RenderPrimitive::Text {
                x,
                y,
                text,
                font_size,
                font_family,
                fill,
                rotation,
            } => {
                let transform = if *rotation != 0.0 {
                    format!(r#" transform="rotate({} {} {})""#, rotation, x, y)
                } else {
                    String::new()
                };
                format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}" text-anchor="middle" dominant-baseline="middle"{}>{}</text>"#,
                    x, y, font_size, escape_xml(font_family), fill, transform,
                    escape_xml(text)
                )
            }
            RenderPrimitive::Path {
                d,
                fill,
                stroke,
                stroke_width,
            } => {
                let fill_attr = fill.as_deref().unwrap_or("none");
                let mut attrs = format!(r#"<path d="{}" fill="{}""#, d, fill_attr);
                if let Some(s) = stroke {
                    let _ = write!(attrs, r#" stroke="{}""#, s);
                }
                if let Some(sw) = stroke_width {
                    let _ = write!(attrs, r#" stroke-width="{}""#, sw);
                }
                attrs.push_str("/>");
                attrs
            }
        }
    }

    fn text(&self, label: &LabelLayout, font_size: f64, color: Color) -> RenderPrimitive {
        let rotation = match label.orientation {
            LabelOrientation::Horizontal => 0.0,
            LabelOrientation::Vertical => -90.0,
        };
        RenderPrimitive::Text {
            x: label.bounds.center_x(),
            y: label.bounds.center_y(),
            text: label.text.clone(),
            font_size,
            font_family: self.style.font_family.clone(),
            fill: color.to_css(),
            rotation,
        }
    }

    fn render_title(&self, primitives: &mut Vec<RenderPrimitive>, label: &LabelLayout) {
        primitives.push(self.text(label, self.style.title_font_size, self.style.text_color));
    }

    fn render_x_ticks(&self, primitives: &mut Vec<RenderPrimitive>, layout: &DiagramLayout) {
        let stroke = self.style.text_color.to_css();

        for tick in &layout.x_ticks {
            primitives.push(RenderPrimitive::Line {
                x1: tick.tick.start.x,
                y1: tick.tick.start.y,
                x2: tick.tick.end.x,
                y2: tick.tick.end.y,
                stroke: stroke.clone(),
                stroke_width: self.style.axis_width,
                dash: None,
            });
            if let Some(ref label) = tick.label {
                primitives.push(self.text(label, self.label_font_size, self.style.text_color));
            }
        }
    }

    fn render_y_labels(&self, primitives: &mut Vec<RenderPrimitive>, layout: &DiagramLayout) {
        for label in &layout.y_labels {
            primitives.push(self.text(label, self.label_font_size, self.style.text_color));
        }
    }

    fn render_gridlines(&self, primitives: &mut Vec<RenderPrimitive>, layout: &DiagramLayout) {
        let stroke = self
            .style
            .text_color
            .with_alpha(self.style.gridline_alpha)
            .to_css();

        for line in &layout.gridlines {
            primitives.push(RenderPrimitive::Line {
                x1: line.start.x,
                y1: line.start.y,
                x2: line.end.x,
                y2: line.end.y,
                stroke: stroke.clone(),
                stroke_width: self.style.gridline_width,
                dash: Some(self.style.gridline_dash.clone()),
            });
        }
    }

    fn render_curves(&self, primitives: &mut Vec<RenderPrimitive>, layout: &DiagramLayout) {
        for curve in &layout.curves {
            primitives.push(RenderPrimitive::Path {
                d: curve_path(curve),
                fill: Some(curve.color.with_alpha(self.style.curve_fill_alpha).to_css()),
                stroke: Some(curve.color.to_css()),
                stroke_width: Some(self.style.curve_width),
            });
            primitives.push(self.text(&curve.label, self.label_font_size, curve.color));
        }
    }
}

/// SVG path data for a curve: start, quadratic to the peak, quadratic to the end
pub fn curve_path(curve: &CurveLayout) -> String {
    let (first, second) = curve.control_points();
    format!(
        "M {} {} Q {} {} {} {} Q {} {} {} {}",
        curve.start.x, curve.start.y,
        first.x, first.y, curve.mid.x, curve.mid.y,
        second.x, second.y, curve.end.x, curve.end.y
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
