//! Text styling and measurement.
//!
//! Layout code depends on [`TextMeasure`] only, so it can run against a real
//! [`FontSystem`] in the host and against fixed metrics in tests.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

use crate::coords::Vec2;
use crate::paint::Color;

/// Font, size, color, and weight for a run of text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Synthetic bold: renderers embolden the regular face.
    pub bold: bool,
}

impl TextStyle {
    pub fn new(font: FontId, size: f32, color: Color) -> Self {
        Self { font, size, color, bold: false }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Text measurement service consumed by layout.
pub trait TextMeasure {
    /// Returns the `(width, height)` of `text` rendered with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        (**self).measure(text, style)
    }
}

/// Fixed-advance metrics: every char is `advance × size` wide and
/// `size` tall. Empty text measures zero width.
///
/// Useful in tests and for cell-based renderers such as terminals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(chars * self.advance * style.size, style.size)
    }
}
