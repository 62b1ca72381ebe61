use serde::{Deserialize, Deserializer};
use timedial_engine::paint::Color;
use timedial_engine::text::{FontId, TextStyle};

use crate::constraints::Edges;

/// Text weight for pointer and suffix text.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Visual parameters of a [`TimeIndicator`](crate::widgets::TimeIndicator).
///
/// "Pointer" refers to the boxed cell holding a time value, "suffix" to the
/// plain separator glyphs between cells.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    pub pointer_width: f32,
    pub pointer_height: f32,
    pub pointer_radius: f32,
    #[serde(deserialize_with = "deserialize_color")]
    pub pointer_background: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub pointer_text_color: Color,
    pub pointer_text_size: f32,
    pub pointer_text_weight: FontWeight,

    #[serde(deserialize_with = "deserialize_color")]
    pub suffix_text_color: Color,
    pub suffix_text_size: f32,
    pub suffix_text_weight: FontWeight,
    pub suffix_margin_left: f32,
    pub suffix_margin_right: f32,

    pub padding: Edges,

    /// Font for both text runs. Set by the host after loading fonts.
    #[serde(skip)]
    pub font: FontId,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            pointer_width: 28.0,
            pointer_height: 28.0,
            pointer_radius: 0.0,
            pointer_background: Color::WHITE,
            pointer_text_color: Color::GRAY,
            pointer_text_size: 12.0,
            pointer_text_weight: FontWeight::Normal,
            suffix_text_color: Color::GRAY,
            suffix_text_size: 12.0,
            suffix_text_weight: FontWeight::Normal,
            suffix_margin_left: 0.0,
            suffix_margin_right: 0.0,
            padding: Edges::default(),
            font: FontId::default(),
        }
    }
}

impl IndicatorStyle {
    pub fn pointer_text_style(&self) -> TextStyle {
        TextStyle::new(self.font, self.pointer_text_size, self.pointer_text_color)
            .bold(self.pointer_text_weight == FontWeight::Bold)
    }

    pub fn suffix_text_style(&self) -> TextStyle {
        TextStyle::new(self.font, self.suffix_text_size, self.suffix_text_color)
            .bold(self.suffix_text_weight == FontWeight::Bold)
    }
}

// ── color parsing ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    /// Packed `0xAARRGGBB`.
    Argb(u32),
    /// `#rrggbb` or `#rrggbbaa`.
    Hex(String),
}

/// Parses `#rrggbb` / `#rrggbbaa` into a color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
}

fn deserialize_color<'de, D: Deserializer<'de>>(de: D) -> Result<Color, D::Error> {
    match ColorRepr::deserialize(de)? {
        ColorRepr::Argb(v) => Ok(Color::from_argb(v)),
        ColorRepr::Hex(s) => parse_hex_color(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid color {s:?}, expected #rrggbb or #rrggbbaa"))
        }),
    }
}
