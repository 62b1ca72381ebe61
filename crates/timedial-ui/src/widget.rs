use timedial_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

/// The contract between a widget and its host surface.
///
/// The host calls `measure` to size the widget, then `paint` with the rect
/// it allocated. Both must be deterministic for the same widget state.
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Record draw commands for this widget inside `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
