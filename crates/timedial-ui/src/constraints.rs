use serde::Deserialize;
use timedial_engine::coords::Vec2;
use timedial_engine::text::TextMeasure;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from the host during measure.
///
/// `loose` corresponds to "at most" sizing (the widget reports its content
/// size), `tight` to an exact size imposed by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child takes its content size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub text: &'a dyn TextMeasure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_reports_content_size() {
        let c = Constraints::loose(Vec2::new(500.0, 100.0));
        assert_eq!(c.constrain(Vec2::new(62.0, 28.0)), Vec2::new(62.0, 28.0));
    }

    #[test]
    fn tight_overrides_content_size() {
        let c = Constraints::tight(Vec2::new(200.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(62.0, 28.0)), Vec2::new(200.0, 40.0));
    }

    #[test]
    fn loose_clamps_overflow() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 20.0)), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn edges_v_sums_top_and_bottom() {
        let e = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        assert_eq!(e.v(), 12.0);
    }

    #[test]
    fn edges_deserialize_partial() {
        let e: Edges = serde_json::from_str(r#"{ "left": 3 }"#).unwrap();
        assert_eq!(e, Edges { left: 3.0, ..Edges::default() });
    }
}
