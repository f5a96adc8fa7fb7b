//! Endpoint extension
//!
//! Line caps are drawn past the logical ends of a connector: the first point
//! is pushed back by the smoothing radius and a synthetic point is appended
//! beyond the last one, so the first and last windows of the corner pass
//! still see a full three-point window.

use crate::error::LineError;
use crate::geometry::{directional_offset, Axis, Point};

/// Return a copy of `points` with both ends pushed outward by `radius`.
///
/// The result has exactly one more point than the input. The first point
/// moves by [`start_shift`]; the last point moves `radius` further along the
/// final segment and a point `2 * radius` past the raw end is appended.
/// Diagonal end pairs are copied unchanged, leaving the corner pass to report
/// them. Non-finite coordinates are rejected before anything else.
pub fn extend_endpoints(points: &[Point], radius: f64) -> Result<Vec<Point>, LineError> {
    if points.len() < 2 {
        return Err(LineError::insufficient(points.len()));
    }
    if let Some(point) = points.iter().find(|p| !p.is_finite()) {
        return Err(LineError::NonFinitePoint { point: *point });
    }

    let mut extended = Vec::with_capacity(points.len() + 1);
    extended.extend_from_slice(points);

    let (s, e) = (extended[0], extended[1]);
    if let Some(axis) = Axis::of(s, e) {
        extended[0] = s.shifted(axis, start_shift(axis, s, e, radius));
    }

    // For a two-point line this sees the already shifted start.
    let last = extended.len() - 1;
    let (s, e) = (extended[last - 1], extended[last]);
    let synthetic = match Axis::of(s, e) {
        Some(axis) => {
            let step = -directional_offset(axis, s, e, radius);
            extended[last] = e.shifted(axis, step);
            e.shifted(axis, 2.0 * step)
        }
        None => e,
    };
    extended.push(synthetic);

    Ok(extended)
}

/// Offset applied to the first point along the first segment's axis.
///
/// Horizontal starts move away from the first movement. Vertical starts move
/// `-radius` when the line heads toward smaller y and `+radius` otherwise,
/// i.e. toward the first movement.
pub fn start_shift(axis: Axis, start: Point, end: Point, radius: f64) -> f64 {
    match axis {
        Axis::Horizontal => directional_offset(axis, start, end, radius),
        Axis::Vertical => -directional_offset(axis, start, end, radius),
    }
}
