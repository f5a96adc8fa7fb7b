//! Draw commands and their SVG path data

use crate::color::Color;
use crate::geometry::Point;

/// A segment of SVG path data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
}

/// Rounded bend appended after a straight run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBend {
    /// Raw corner vertex
    pub control: Point,
    pub end: Point,
}

/// One emitted piece of a smoothed line
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub start: Point,
    pub end: Point,
    pub bend: Option<QuadBend>,
    pub stroke: Color,
}

impl DrawCommand {
    pub fn is_curved(&self) -> bool {
        self.bend.is_some()
    }

    /// Path segments in drawing order
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments = vec![PathSegment::MoveTo(self.start), PathSegment::LineTo(self.end)];
        if let Some(bend) = self.bend {
            segments.push(PathSegment::QuadraticTo {
                control: bend.control,
                end: bend.end,
            });
        }
        segments
    }

    /// Convert to an SVG path `d` attribute string.
    ///
    /// Straight commands give `M x1,y1 L x2,y2`; curved ones append
    /// ` Q cx,cy ex,ey`. Coordinates are written unrounded.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for seg in self.segments() {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => d.push_str(&format!("M {}", p)),
                PathSegment::LineTo(p) => d.push_str(&format!("L {}", p)),
                PathSegment::QuadraticTo { control, end } => {
                    d.push_str(&format!("Q {} {}", control, end))
                }
            }
        }

        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_d() {
        let cmd = DrawCommand {
            start: Point::new(0.0, 1.5),
            end: Point::new(12.0, 1.5),
            bend: None,
            stroke: Color::from("#000"),
        };
        assert!(!cmd.is_curved());
        assert_eq!(cmd.to_svg_d(), "M 0,1.5 L 12,1.5");
    }

    #[test]
    fn test_curved_d() {
        let cmd = DrawCommand {
            start: Point::new(0.0, 0.0),
            end: Point::new(9.0, 0.0),
            bend: Some(QuadBend {
                control: Point::new(10.0, 0.0),
                end: Point::new(10.0, 1.0),
            }),
            stroke: Color::from("#000"),
        };
        assert!(cmd.is_curved());
        assert_eq!(cmd.segments().len(), 3);
        assert_eq!(cmd.to_svg_d(), "M 0,0 L 9,0 Q 10,0 10,1");
    }
}
