use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Same size, origin moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }

    /// Top-left position that centers a box of `inner` size in this rect.
    #[inline]
    pub fn centered_origin(self, inner: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + (self.size.x - inner.x) / 2.0,
            self.origin.y + (self.size.y - inner.y) / 2.0,
        )
    }
}
