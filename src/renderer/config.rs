//! Configuration for the SVG renderer

use serde::{Deserialize, Deserializer};

use crate::color::Color;

/// Configuration options for the drawing surface and line smoothing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Overshoot at line ends and rounding distance at corners; never negative
    #[serde(deserialize_with = "non_negative")]
    pub smoothing_radius: f64,

    /// Width of the viewBox in user units
    pub view_box_width: f64,

    /// Height of the viewBox in user units
    pub view_box_height: f64,

    /// Rendered width in pixels
    pub width: f64,

    /// Rendered height in pixels
    pub height: f64,

    /// `id` attribute of the root `<svg>` element
    pub id: String,

    /// Default stroke for lines, and default border and fill for shapes
    pub stroke_color: Color,

    pub background_color: Color,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            smoothing_radius: 7.0,
            view_box_width: 100.0,
            view_box_height: 100.0,
            width: 1000.0,
            height: 1000.0,
            id: "svgRendererOutput".to_string(),
            stroke_color: Color::from("#ff0000"),
            background_color: Color::from("#ffffff"),
            standalone: true,
            pretty_print: true,
        }
    }
}

impl RendererConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing radius (stored as its absolute value)
    pub fn with_smoothing_radius(mut self, radius: f64) -> Self {
        self.smoothing_radius = radius.abs();
        self
    }

    /// Set the viewBox size
    pub fn with_view_box(mut self, width: f64, height: f64) -> Self {
        self.view_box_width = width;
        self.view_box_height = height;
        self
    }

    /// Set the rendered pixel size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the root element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the default stroke color
    pub fn with_stroke_color(mut self, color: impl Into<Color>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(f64::abs)
}
