//! Curve emission: one draw command per corner

use crate::color::Color;
use crate::renderer::path::{DrawCommand, QuadBend};

use super::corners::Corner;

/// Turn a corner into a straight run, plus a quadratic bend when the line turns.
///
/// The run covers the incoming segment pulled in by the smoothing radius at
/// both ends. The bend uses the raw joint as its control point and stops one
/// radius into the outgoing segment.
pub fn emit(corner: &Corner, stroke: &Color) -> DrawCommand {
    let axis = corner.incoming;
    let start = corner.start.shifted(axis, -corner.incoming_offset);
    let end = corner.end.shifted(axis, corner.incoming_offset);

    let bend = corner.is_turn().then(|| QuadBend {
        control: corner.end,
        end: corner.end.shifted(corner.outgoing, -corner.outgoing_offset),
    });

    DrawCommand {
        start,
        end,
        bend,
        stroke: stroke.clone(),
    }
}
