//! Error types for line smoothing

use thiserror::Error;

use crate::geometry::Point;

/// Errors that abort a single `line` call.
///
/// Both are raised before anything reaches the drawing surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// Fewer than two waypoints were supplied
    #[error("a line needs at least 2 points, got {count}")]
    InsufficientPoints { count: usize },

    /// A waypoint has an infinite or NaN coordinate
    #[error("point ({point}) has a non-finite coordinate")]
    NonFinitePoint { point: Point },

    /// Two consecutive waypoints share neither coordinate
    #[error("points are not orthogonal: ({start}) -> ({end})")]
    NonOrthogonalSegment { start: Point, end: Point },
}

impl LineError {
    /// Create an insufficient points error
    pub fn insufficient(count: usize) -> Self {
        Self::InsufficientPoints { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LineError::insufficient(1).to_string(),
            "a line needs at least 2 points, got 1"
        );
        let err = LineError::NonOrthogonalSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(2.5, 1.0),
        };
        assert_eq!(err.to_string(), "points are not orthogonal: (0,0) -> (2.5,1)");
    }
}
