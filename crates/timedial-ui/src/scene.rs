use timedial_engine::coords::{Rect, Vec2};
use timedial_engine::scene::DrawList;
use timedial_engine::text::{FontSystem, TextMeasure};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Owns the text measurer and the draw list reused across frames.
///
/// Call [`frame`](Self::frame) after every tick or style change and hand the
/// returned list to a renderer.
pub struct UiScene<M: TextMeasure = FontSystem> {
    pub text: M,
    /// Draw list populated by the most recent frame.
    pub draw_list: DrawList,
}

impl<M: TextMeasure> UiScene<M> {
    pub fn new(text: M) -> Self {
        Self { text, draw_list: DrawList::new() }
    }

    /// Measures `root` under `constraints` and paints it at the origin.
    ///
    /// Returns the allocated rect alongside the draw list.
    pub fn frame(&mut self, root: &dyn Widget, constraints: Constraints) -> (Rect, &DrawList) {
        self.draw_list.clear();

        let ctx = LayoutCtx { text: &self.text };
        let size = root.measure(constraints, &ctx);
        let rect = Rect::from_origin_size(Vec2::zero(), size);

        let mut painter = Painter::new(&mut self.draw_list, &self.text);
        root.paint(&mut painter, rect);

        (rect, &self.draw_list)
    }
}

impl Default for UiScene<FontSystem> {
    fn default() -> Self {
        Self::new(FontSystem::new())
    }
}
