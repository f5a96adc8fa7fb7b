//! Orthogonal polyline smoothing
//!
//! Turns a list of axis-aligned waypoints into short overlapping draw
//! commands with rounded corners:
//!
//! 1. [`extend_endpoints`] pushes both caps outward by the smoothing radius
//! 2. [`corners`] describes every three-point window
//! 3. [`emit`] turns each window into one straight or curved command
//!
//! Every step is pure; nothing is produced unless the whole line is valid.

pub mod corners;
pub mod emit;
pub mod extend;

pub use corners::{corners, Corner, WINDOW_SIZE};
pub use emit::emit;
pub use extend::extend_endpoints;

use crate::color::Color;
use crate::error::LineError;
use crate::geometry::Point;
use crate::renderer::path::DrawCommand;

/// Smooth a waypoint list into draw commands.
///
/// Returns `points.len() - 1` commands in waypoint order, or the first error
/// encountered. The caller's slice is never modified.
pub fn smooth(
    points: &[Point],
    radius: f64,
    stroke: &Color,
) -> Result<Vec<DrawCommand>, LineError> {
    let extended = extend_endpoints(points, radius)?;
    let corners = corners(&extended, radius)?;

    let commands = corners
        .iter()
        .map(|corner| {
            log::debug!(
                "corner {}, {}, {} -> {}, {}, {}",
                corner.incoming.symbol(),
                corner.incoming_offset,
                corner.start,
                corner.outgoing.symbol(),
                corner.outgoing_offset,
                corner.end
            );
            if !corner.is_turn() {
                log::trace!("straight continuation {} -> {}", corner.start, corner.end);
            }
            let cmd = emit(corner, stroke);
            log::trace!("emit {}", cmd.to_svg_d());
            cmd
        })
        .collect();

    Ok(commands)
}
