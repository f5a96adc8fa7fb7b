//! Points, axes and the segment classifier

use std::fmt;

use serde::Deserialize;

use crate::error::LineError;

/// A 2D point in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate of this point along the given axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Copy of this point moved by `delta` along the given axis
    pub fn shifted(self, axis: Axis, delta: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.x + delta, self.y),
            Axis::Vertical => Self::new(self.x, self.y + delta),
        }
    }
}

/// Formats as `x,y`, the coordinate pair syntax of SVG path data
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Orientation of an orthogonal segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Axis of the segment `start -> end`, or `None` for a diagonal pair.
    ///
    /// The x test runs first, so a zero-length segment is vertical.
    pub fn of(start: Point, end: Point) -> Option<Axis> {
        if start.x == end.x {
            Some(Axis::Vertical)
        } else if start.y == end.y {
            Some(Axis::Horizontal)
        } else {
            None
        }
    }

    /// Short label used in debug output
    pub fn symbol(self) -> char {
        match self {
            Axis::Horizontal => 'H',
            Axis::Vertical => 'V',
        }
    }
}

/// Classify a segment, rejecting diagonal pairs
pub fn classify(start: Point, end: Point) -> Result<Axis, LineError> {
    Axis::of(start, end).ok_or(LineError::NonOrthogonalSegment { start, end })
}

/// Signed smoothing offset of a segment along its axis.
///
/// Positive when the segment travels toward the decreasing coordinate,
/// negative otherwise. Its magnitude is always `radius`.
pub fn directional_offset(axis: Axis, start: Point, end: Point, radius: f64) -> f64 {
    if start.along(axis) > end.along(axis) {
        radius
    } else {
        -radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_horizontal() {
        let axis = classify(Point::new(0.0, 5.0), Point::new(10.0, 5.0)).unwrap();
        assert_eq!(axis, Axis::Horizontal);
    }

    #[test]
    fn test_classify_vertical() {
        let axis = classify(Point::new(3.0, 0.0), Point::new(3.0, -8.0)).unwrap();
        assert_eq!(axis, Axis::Vertical);
    }

    #[test]
    fn test_classify_zero_length_is_vertical() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(classify(p, p).unwrap(), Axis::Vertical);
    }

    #[test]
    fn test_classify_diagonal_names_the_pair() {
        let err = classify(Point::new(0.0, 0.0), Point::new(1.0, 2.0)).unwrap_err();
        match err {
            LineError::NonOrthogonalSegment { start, end } => {
                assert_eq!(start, Point::new(0.0, 0.0));
                assert_eq!(end, Point::new(1.0, 2.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directional_offset_sign() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(directional_offset(Axis::Horizontal, a, b, 2.0), -2.0);
        assert_eq!(directional_offset(Axis::Horizontal, b, a, 2.0), 2.0);

        let c = Point::new(0.0, 10.0);
        assert_eq!(directional_offset(Axis::Vertical, a, c, 0.5), -0.5);
        assert_eq!(directional_offset(Axis::Vertical, c, a, 0.5), 0.5);
    }

    #[test]
    fn test_display_uses_shortest_form() {
        assert_eq!(Point::new(10.0, 24.75).to_string(), "10,24.75");
        assert_eq!(Point::new(-0.5, 3.0).to_string(), "-0.5,3");
    }

    #[test]
    fn test_shifted_copies() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.shifted(Axis::Horizontal, 3.0), Point::new(4.0, 2.0));
        assert_eq!(p.shifted(Axis::Vertical, -1.0), Point::new(1.0, 1.0));
        assert_eq!(p, Point::new(1.0, 2.0));
    }
}
