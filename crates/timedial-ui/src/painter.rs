use timedial_engine::coords::{CornerRadii, Rect, Vec2};
use timedial_engine::paint::Color;
use timedial_engine::scene::DrawList;
use timedial_engine::text::{TextMeasure, TextStyle};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and carries the text
/// measurement service so widgets can lay out while painting through
/// [`layout_ctx`](Self::layout_ctx).
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    text: &'a dyn TextMeasure,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, text: &'a dyn TextMeasure) -> Self {
        Self { draw_list, text }
    }

    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { text: self.text }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle. Pass `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.draw_list.push_rounded_rect(rect, CornerRadii::all(radius.max(0.0)), color);
    }

    /// Text with its top-left at `origin`. Empty strings record nothing.
    pub fn text(&mut self, text: &str, style: TextStyle, origin: Vec2) {
        if text.is_empty() {
            return;
        }
        self.draw_list.push_text(text, style, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timedial_engine::scene::DrawCmd;
    use timedial_engine::text::{FontId, MonospaceMeasure};

    fn style() -> TextStyle {
        TextStyle::new(FontId::default(), 12.0, Color::GRAY)
    }

    #[test]
    fn empty_text_keeps_background_and_skips_text() {
        let mut list = DrawList::new();
        let measure = MonospaceMeasure::default();
        let mut painter = Painter::new(&mut list, &measure);

        let cell = Rect::new(0.0, 0.0, 28.0, 28.0);
        painter.fill_rounded_rect(cell, 4.0, Color::WHITE);
        painter.text("", style(), cell.centered_origin(Vec2::zero()));

        assert_eq!(list.cmds().len(), 1);
        let bg = list.cmds()[0].as_rounded_rect().unwrap();
        assert_eq!(bg.rect, cell);
        assert!(list.cmds().iter().all(|c| !matches!(c, DrawCmd::Text(_))));
    }

    #[test]
    fn negative_radius_is_clamped() {
        let mut list = DrawList::new();
        let measure = MonospaceMeasure::default();
        Painter::new(&mut list, &measure).fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), -3.0, Color::BLACK);
        assert_eq!(list.cmds()[0].as_rounded_rect().unwrap().radii, CornerRadii::all(0.0));
    }

    #[test]
    fn text_records_origin_and_style() {
        let mut list = DrawList::new();
        let measure = MonospaceMeasure::default();
        Painter::new(&mut list, &measure).text("01", style(), Vec2::new(8.0, 8.0));
        let t = list.cmds()[0].as_text().unwrap();
        assert_eq!((t.text.as_str(), t.origin), ("01", Vec2::new(8.0, 8.0)));
        assert_eq!(t.style.size, 12.0);
    }
}
