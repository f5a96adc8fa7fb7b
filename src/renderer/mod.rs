//! SVG renderer for lines, circles and rectangles
//!
//! [`SvgRenderer`] turns drawing calls into [`SvgNode`]s and hands each call's
//! nodes to its [`DrawingSurface`] in one batch.

pub mod config;
pub mod path;
pub mod shapes;
pub mod svg;

pub use config::RendererConfig;
pub use path::{DrawCommand, PathSegment, QuadBend};
pub use shapes::{Circle, Rectangle, RectangleOptions};
pub use svg::{DrawingSurface, SvgDocument, SvgNode};

use crate::color::Color;
use crate::error::LineError;
use crate::geometry::Point;
use crate::smoothing;

/// Renders shapes onto a drawing surface
#[derive(Debug, Clone)]
pub struct SvgRenderer<S: DrawingSurface = SvgDocument> {
    config: RendererConfig,
    surface: S,
}

impl SvgRenderer<SvgDocument> {
    /// Create a renderer drawing into a fresh [`SvgDocument`]
    pub fn new(config: RendererConfig) -> Self {
        let radius = config.smoothing_radius;
        let config = config.with_smoothing_radius(radius);
        let surface = SvgDocument::new(&config);
        Self { config, surface }
    }

    /// Serialize everything drawn so far
    pub fn to_svg(&self) -> String {
        self.surface.to_svg()
    }
}

impl Default for SvgRenderer<SvgDocument> {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl<S: DrawingSurface> SvgRenderer<S> {
    /// Create a renderer drawing into a caller-supplied surface
    pub fn with_surface(config: RendererConfig, surface: S) -> Self {
        let radius = config.smoothing_radius;
        let config = config.with_smoothing_radius(radius);
        Self { config, surface }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draw an orthogonal connector with rounded corners.
    ///
    /// `stroke` defaults to the configured stroke color. Fails without
    /// touching the surface if fewer than two points are given or any
    /// consecutive pair is diagonal.
    pub fn line(&mut self, points: &[Point], stroke: Option<Color>) -> Result<(), LineError> {
        let stroke = stroke.unwrap_or_else(|| self.config.stroke_color.clone());
        let commands = smoothing::smooth(points, self.config.smoothing_radius, &stroke)?;

        log::debug!(
            "line with {} points -> {} paths",
            points.len(),
            commands.len()
        );
        self.surface
            .append(commands.into_iter().map(SvgNode::Path).collect());
        Ok(())
    }

    /// Draw filled circles; `color` defaults to the configured stroke color
    pub fn circles(&mut self, circles: &[Circle], color: Option<Color>) {
        let color = color.unwrap_or_else(|| self.config.stroke_color.clone());
        self.surface.append(shapes::circle_nodes(circles, &color));
    }

    /// Draw rectangles with optional rounding and color overrides
    pub fn rectangles(&mut self, rectangles: &[Rectangle], options: &RectangleOptions) {
        self.surface.append(shapes::rectangle_nodes(
            rectangles,
            options,
            &self.config.stroke_color,
        ));
    }

    /// Remove everything drawn so far
    pub fn clear(&mut self) {
        self.surface.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records every batch it receives
    #[derive(Default)]
    struct Recorder {
        batches: Vec<Vec<SvgNode>>,
        clears: usize,
    }

    impl DrawingSurface for Recorder {
        fn append(&mut self, nodes: Vec<SvgNode>) {
            self.batches.push(nodes);
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn test_negative_radius_is_normalized() {
        let mut config = RendererConfig::default();
        config.smoothing_radius = -2.0;
        let renderer = SvgRenderer::new(config);
        assert_eq!(renderer.config().smoothing_radius, 2.0);
    }

    #[test]
    fn test_line_appends_one_batch() {
        let mut renderer = SvgRenderer::with_surface(RendererConfig::default(), Recorder::default());
        let points = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 20.0),
            Point::new(40.0, 20.0),
        ];
        renderer.line(&points, None).unwrap();

        let recorder = renderer.into_surface();
        assert_eq!(recorder.batches.len(), 1);
        assert_eq!(recorder.batches[0].len(), 3);
    }

    #[test]
    fn test_failed_line_appends_nothing() {
        let mut renderer = SvgRenderer::with_surface(RendererConfig::default(), Recorder::default());
        let points = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 5.0),
        ];
        assert!(renderer.line(&points, None).is_err());
        assert!(renderer.line(&[], None).is_err());
        assert!(renderer.surface().batches.is_empty());
    }

    #[test]
    fn test_default_stroke_is_used() {
        let mut renderer = SvgRenderer::new(RendererConfig::default().with_stroke_color("#123456"));
        renderer
            .line(&[Point::new(0.0, 0.0), Point::new(0.0, 9.0)], None)
            .unwrap();
        match &renderer.surface().nodes()[0] {
            SvgNode::Path(cmd) => assert_eq!(cmd.stroke.as_str(), "#123456"),
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_clear_is_forwarded() {
        let mut renderer = SvgRenderer::with_surface(RendererConfig::default(), Recorder::default());
        renderer.circles(&[Circle { x: 0.0, y: 0.0, radius: 1.0 }], None);
        renderer.clear();
        assert_eq!(renderer.surface().clears, 1);
    }
}
