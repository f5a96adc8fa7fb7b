//! SVG drawing surface

use crate::color::Color;

use super::path::DrawCommand;
use super::shapes::{Circle, Rectangle};
use super::RendererConfig;

/// Receiver of finished nodes.
///
/// A renderer hands over everything produced by one call in a single
/// `append`, so a failed call never leaves a partial drawing behind.
pub trait DrawingSurface {
    /// Append a batch of nodes, preserving their order
    fn append(&mut self, nodes: Vec<SvgNode>);

    /// Remove every node appended so far
    fn clear(&mut self);
}

/// A single child element of the root `<svg>`
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    /// One piece of a smoothed line
    Path(DrawCommand),
    Circle {
        num: usize,
        circle: Circle,
        color: Color,
    },
    Rect {
        num: usize,
        rect: Rectangle,
        rounded: f64,
        border: Color,
        fill: Color,
    },
}

impl SvgNode {
    /// Serialize as a self-closing SVG element
    pub fn to_markup(&self) -> String {
        match self {
            SvgNode::Path(cmd) => format!(
                r#"<path d="{}" fill="none" stroke="{}"/>"#,
                cmd.to_svg_d(),
                escape_xml(cmd.stroke.as_str())
            ),
            SvgNode::Circle { num, circle, color } => {
                let color = escape_xml(color.as_str());
                format!(
                    r#"<circle data-num="{}" cx="{}" cy="{}" r="{}" stroke="{}" fill="{}"/>"#,
                    num, circle.x, circle.y, circle.radius, color, color
                )
            }
            SvgNode::Rect {
                num,
                rect,
                rounded,
                border,
                fill,
            } => format!(
                r#"<rect data-num="{}" x="{}" y="{}" width="{}" height="{}" stroke="{}" fill="{}" rx="{}" ry="{}"/>"#,
                num,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                escape_xml(border.as_str()),
                escape_xml(fill.as_str()),
                rounded,
                rounded
            ),
        }
    }
}

/// In-memory SVG document
#[derive(Debug, Clone)]
pub struct SvgDocument {
    config: RendererConfig,
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    /// Create an empty document using the root attributes from `config`
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            config: config.clone(),
            nodes: vec![],
        }
    }

    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    /// Build the final SVG string
    pub fn to_svg(&self) -> String {
        let config = &self.config;
        let nl = self.newline();

        let mut svg = String::new();

        if config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" viewBox="0 0 {} {}" width="{}px" height="{}px" stroke="{}" style="background-color: {}">"#,
            escape_xml(&config.id),
            config.view_box_width,
            config.view_box_height,
            config.width,
            config.height,
            escape_xml(config.stroke_color.as_str()),
            escape_xml(config.background_color.as_str())
        ));
        svg.push_str(nl);

        for node in &self.nodes {
            svg.push_str(self.indent_str());
            svg.push_str(&node.to_markup());
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

impl DrawingSurface for SvgDocument {
    fn append(&mut self, nodes: Vec<SvgNode>) {
        self.nodes.extend(nodes);
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
