//! Circle and rectangle primitives

use serde::Deserialize;

use crate::color::Color;

use super::svg::SvgNode;

/// A circle centered on `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// An axis-aligned rectangle with its top-left corner at `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Optional overrides for a batch of rectangles
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RectangleOptions {
    /// Corner radius used for both `rx` and `ry`
    pub rounded: f64,
    /// Border color, defaults to the configured stroke color
    pub border: Option<Color>,
    /// Fill color, defaults to the configured stroke color
    pub fill: Option<Color>,
}

impl RectangleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounded(mut self, rounded: f64) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn with_border(mut self, color: impl Into<Color>) -> Self {
        self.border = Some(color.into());
        self
    }

    pub fn with_fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = Some(color.into());
        self
    }
}

/// Circle nodes numbered from zero, stroked and filled with `color`
pub fn circle_nodes(circles: &[Circle], color: &Color) -> Vec<SvgNode> {
    circles
        .iter()
        .enumerate()
        .map(|(num, circle)| SvgNode::Circle {
            num,
            circle: *circle,
            color: color.clone(),
        })
        .collect()
}

/// Rectangle nodes numbered from zero; unset colors fall back to `default_color`
pub fn rectangle_nodes(
    rectangles: &[Rectangle],
    options: &RectangleOptions,
    default_color: &Color,
) -> Vec<SvgNode> {
    let border = options.border.as_ref().unwrap_or(default_color);
    let fill = options.fill.as_ref().unwrap_or(default_color);

    rectangles
        .iter()
        .enumerate()
        .map(|(num, rect)| SvgNode::Rect {
            num,
            rect: *rect,
            rounded: options.rounded,
            border: border.clone(),
            fill: fill.clone(),
        })
        .collect()
}
