//! TOML scene files
//!
//! A scene is a renderer configuration plus an ordered list of drawing
//! operations:
//!
//! ```toml
//! [config]
//! smoothing_radius = 0.25
//!
//! [[draw]]
//! type = "line"
//! stroke = "#000000"
//! points = [{ x = 10, y = 10 }, { x = 25, y = 10 }, { x = 25, y = 25 }]
//! ```

use std::ops::Range;
use std::path::Path;

use ariadne::{Color as ReportColor, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use crate::color::Color;
use crate::error::LineError;
use crate::geometry::Point;
use crate::renderer::{Circle, Rectangle, RectangleOptions, RendererConfig, SvgRenderer};

/// Byte range in scene source text
pub type Span = Range<usize>;

/// Errors that can occur when loading or rendering a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("draw operation {index}: {source}")]
    Line {
        index: usize,
        span: Span,
        source: LineError,
    },
}

impl SceneError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            SceneError::Io(_) => return self.to_string(),
            SceneError::Toml(err) => match err.span() {
                Some(span) => (span, err.message().to_string()),
                None => return self.to_string(),
            },
            SceneError::Line { span, source, .. } => (span.clone(), source.to_string()),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(ReportColor::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// One drawing call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawOp {
    Line {
        #[serde(default)]
        stroke: Option<Color>,
        points: Vec<Point>,
    },
    Circles {
        #[serde(default)]
        color: Option<Color>,
        items: Vec<Circle>,
    },
    Rectangles {
        #[serde(default)]
        rounded: f64,
        #[serde(default)]
        border: Option<Color>,
        #[serde(default)]
        fill: Option<Color>,
        items: Vec<Rectangle>,
    },
}

/// A parsed scene file
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: RendererConfig,
    #[serde(default)]
    pub draw: Vec<Spanned<DrawOp>>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Run every drawing operation in order and serialize the result.
    ///
    /// Stops at the first failing line; nothing is returned in that case.
    pub fn render(&self) -> Result<String, SceneError> {
        let mut renderer = SvgRenderer::new(self.config.clone());

        for (index, op) in self.draw.iter().enumerate() {
            match op.get_ref() {
                DrawOp::Line { stroke, points } => renderer
                    .line(points, stroke.clone())
                    .map_err(|source| SceneError::Line {
                        index,
                        span: op.span(),
                        source,
                    })?,
                DrawOp::Circles { color, items } => renderer.circles(items, color.clone()),
                DrawOp::Rectangles {
                    rounded,
                    border,
                    fill,
                    items,
                } => {
                    let options = RectangleOptions {
                        rounded: *rounded,
                        border: border.clone(),
                        fill: fill.clone(),
                    };
                    renderer.rectangles(items, &options);
                }
            }
        }

        log::info!(
            "rendered {} operations into {} nodes",
            self.draw.len(),
            renderer.surface().len()
        );
        Ok(renderer.to_svg())
    }
}
