//! Three-point corner windows over an extended waypoint list

use crate::error::LineError;
use crate::geometry::{classify, directional_offset, Axis, Point};

/// Number of consecutive points examined per corner
pub const WINDOW_SIZE: usize = 3;

/// One window `(p0, p1, p2)`: the segment `p0 -> p1` and the turn into `p1 -> p2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// First point of the window
    pub start: Point,
    /// Joint between the two segments
    pub end: Point,
    pub incoming: Axis,
    pub incoming_offset: f64,
    pub outgoing: Axis,
    pub outgoing_offset: f64,
}

impl Corner {
    /// Describe the window `p0, p1, p2`, failing on a diagonal segment
    pub fn from_window(p0: Point, p1: Point, p2: Point, radius: f64) -> Result<Self, LineError> {
        let incoming = classify(p0, p1)?;
        let outgoing = classify(p1, p2)?;

        Ok(Self {
            start: p0,
            end: p1,
            incoming,
            incoming_offset: directional_offset(incoming, p0, p1, radius),
            outgoing,
            outgoing_offset: directional_offset(outgoing, p1, p2, radius),
        })
    }

    /// Whether the line changes direction at `end`
    pub fn is_turn(&self) -> bool {
        self.incoming != self.outgoing
    }
}

/// Describe every window of `points`.
///
/// Yields `points.len() - 2` corners; any diagonal pair fails the whole list.
pub fn corners(points: &[Point], radius: f64) -> Result<Vec<Corner>, LineError> {
    points
        .windows(WINDOW_SIZE)
        .map(|w| Corner::from_window(w[0], w[1], w[2], radius))
        .collect()
}
