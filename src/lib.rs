//! ortho-svg - rounded orthogonal connectors for SVG
//!
//! This library draws circles, rectangles and axis-aligned connector lines
//! into an SVG document. Connector corners are rounded by a configurable
//! smoothing radius and line caps overshoot their end points by the same
//! distance.
//!
//! # Example
//!
//! ```rust
//! use ortho_svg::{Point, RendererConfig, SvgRenderer};
//!
//! let mut renderer = SvgRenderer::new(RendererConfig::default().with_smoothing_radius(0.25));
//! renderer
//!     .line(
//!         &[Point::new(10.0, 10.0), Point::new(25.0, 10.0), Point::new(25.0, 25.0)],
//!         Some("#000000".into()),
//!     )
//!     .unwrap();
//!
//! let svg = renderer.to_svg();
//! assert!(svg.contains(r#"d="M 10,10 L 24.75,10 Q 25,10 25,10.25""#));
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod smoothing;

pub use color::Color;
pub use error::LineError;
pub use geometry::{Axis, Point};
pub use renderer::{
    Circle, DrawCommand, DrawingSurface, Rectangle, RectangleOptions, RendererConfig,
    SvgDocument, SvgNode, SvgRenderer,
};
pub use scene::{DrawOp, Scene, SceneError};

/// Render a TOML scene to SVG
///
/// # Example
///
/// ```rust
/// use ortho_svg::render;
///
/// let svg = render(r#"
///     [[draw]]
///     type = "line"
///     points = [{ x = 0, y = 0 }, { x = 0, y = 10 }]
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"d="M 0,14 L 0,10""#));
/// ```
pub fn render(source: &str) -> Result<String, SceneError> {
    Scene::from_str(source)?.render()
}
