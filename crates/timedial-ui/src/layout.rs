//! Left-to-right placement of pointer cells and suffix glyphs.
//!
//! Pointer cells have a fixed size and center their text; suffixes take their
//! measured width plus margins. The whole row sits inside the style padding.

use timedial_engine::coords::{Rect, Vec2};
use timedial_engine::text::TextMeasure;
use timedial_format::Token;

use crate::style::IndicatorStyle;

/// Glyph measured to size a row that has no pointer cells taller than text.
const REFERENCE_GLYPH: &str = "0";

/// Geometry and text for one token.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub token: Token,
    /// Pointer background. `None` for suffixes.
    pub background: Option<Rect>,
    /// Top-left of the text block.
    pub text_origin: Vec2,
    pub display_text: String,
}

/// Positioned cells in token order plus the overall content size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorLayout {
    pub cells: Vec<LayoutCell>,
    pub size: Vec2,
}

impl IndicatorLayout {
    /// The same layout moved so its top-left sits at `origin`.
    #[must_use]
    pub fn translated(mut self, origin: Vec2) -> Self {
        for cell in &mut self.cells {
            cell.background = cell.background.map(|r| r.translated(origin));
            cell.text_origin = cell.text_origin + origin;
        }
        self
    }
}

/// Lays out `tokens` with their display `texts`.
///
/// `texts[i]` belongs to `tokens[i]`; a missing entry falls back to the
/// token's own pattern. The result always has exactly one cell per token.
pub fn layout_tokens(
    tokens: &[Token],
    texts: &[String],
    style: &IndicatorStyle,
    measure: &dyn TextMeasure,
) -> IndicatorLayout {
    let pad = style.padding;
    let pointer_style = style.pointer_text_style();
    let suffix_style = style.suffix_text_style();

    let mut cursor = pad.left;
    let mut cells = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let text = texts.get(i).map(String::as_str).unwrap_or(token.pattern);

        if token.is_value_slot() {
            let bg = Rect::new(cursor, pad.top, style.pointer_width, style.pointer_height);
            let text_size = measure.measure(text, &pointer_style);
            cells.push(LayoutCell {
                token: token.clone(),
                background: Some(bg),
                text_origin: bg.centered_origin(text_size),
                display_text: text.to_string(),
            });
            cursor += style.pointer_width;
        } else {
            let text_size = measure.measure(text, &suffix_style);
            let x = cursor + style.suffix_margin_left;
            let y = pad.top + (style.pointer_height - text_size.y) / 2.0;
            cells.push(LayoutCell {
                token: token.clone(),
                background: None,
                text_origin: Vec2::new(x, y),
                display_text: text.to_string(),
            });
            cursor = x + text_size.x + style.suffix_margin_right;
        }
    }

    let glyph_h = measure.measure(REFERENCE_GLYPH, &suffix_style).y;
    let height = (pad.v() + style.pointer_height).max(pad.v() + glyph_h);

    IndicatorLayout { cells, size: Vec2::new(cursor + pad.right, height) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Edges;
    use pretty_assertions::assert_eq;
    use timedial_engine::text::MonospaceMeasure;
    use timedial_format::tokenize;

    // advance 0.5 at size 12: 6px per char, 12px tall
    const M: MonospaceMeasure = MonospaceMeasure { advance: 0.5 };

    fn run(pattern: &str, texts: &[&str], style: &IndicatorStyle) -> IndicatorLayout {
        let tokens = tokenize(pattern).tokens;
        let texts: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        layout_tokens(&tokens, &texts, style, &M)
    }

    #[test]
    fn pointer_and_suffix_positions() {
        let out = run("HH:mm", &["01", ":", "02"], &IndicatorStyle::default());
        assert_eq!(out.cells.len(), 3);

        assert_eq!(out.cells[0].background, Some(Rect::new(0.0, 0.0, 28.0, 28.0)));
        assert_eq!(out.cells[0].text_origin, Vec2::new(8.0, 8.0));

        assert_eq!(out.cells[1].background, None);
        assert_eq!(out.cells[1].text_origin, Vec2::new(28.0, 8.0));

        assert_eq!(out.cells[2].background, Some(Rect::new(34.0, 0.0, 28.0, 28.0)));
        assert_eq!(out.cells[2].text_origin, Vec2::new(42.0, 8.0));

        assert_eq!(out.size, Vec2::new(62.0, 28.0));
    }

    #[test]
    fn margins_and_padding() {
        let style = IndicatorStyle {
            suffix_margin_left: 2.0,
            suffix_margin_right: 3.0,
            padding: Edges { top: 4.0, right: 5.0, bottom: 6.0, left: 7.0 },
            ..IndicatorStyle::default()
        };
        let out = run("ss:ss", &["09", ":", "10"], &style);

        assert_eq!(out.cells[0].background, Some(Rect::new(7.0, 4.0, 28.0, 28.0)));
        // 7 + 28 + margin 2
        assert_eq!(out.cells[1].text_origin, Vec2::new(37.0, 12.0));
        // 37 + 6 + margin 3
        assert_eq!(out.cells[2].background, Some(Rect::new(46.0, 4.0, 28.0, 28.0)));
        assert_eq!(out.size, Vec2::new(46.0 + 28.0 + 5.0, 4.0 + 6.0 + 28.0));
    }

    #[test]
    fn tall_suffix_text_sets_height() {
        let style = IndicatorStyle {
            pointer_height: 10.0,
            suffix_text_size: 30.0,
            ..IndicatorStyle::default()
        };
        let out = run("HH", &["01"], &style);
        assert_eq!(out.size.y, 30.0);
    }

    #[test]
    fn empty_pattern_lays_out_nothing() {
        let out = run("", &[], &IndicatorStyle::default());
        assert!(out.cells.is_empty());
        assert_eq!(out.size, Vec2::new(0.0, 28.0));
    }

    #[test]
    fn cell_count_matches_tokens() {
        for pattern in ["yyyy-MM-dd HH:mm:ss", "yyyy年MM月dd日", "ss.SSS", "HH"] {
            let tokens = tokenize(pattern).tokens;
            let texts: Vec<String> = tokens.iter().map(|t| t.pattern.to_string()).collect();
            let out = layout_tokens(&tokens, &texts, &IndicatorStyle::default(), &M);
            assert_eq!(out.cells.len(), tokens.len());
            let order: Vec<_> = out.cells.iter().map(|c| c.token.clone()).collect();
            assert_eq!(order, tokens);
        }
    }

    #[test]
    fn missing_texts_fall_back_to_token_patterns() {
        let tokens = tokenize("HH:mm").tokens;
        let out = layout_tokens(&tokens, &[], &IndicatorStyle::default(), &M);
        let shown: Vec<&str> = out.cells.iter().map(|c| c.display_text.as_str()).collect();
        assert_eq!(shown, ["HH", ":", "mm"]);

        let partial = layout_tokens(&tokens, &["07".to_string()], &IndicatorStyle::default(), &M);
        assert_eq!(partial.cells[0].display_text, "07");
        assert_eq!(partial.cells[2].display_text, "mm");
    }

    #[test]
    fn wide_text_overflows_cell_symmetrically() {
        let out = run("yyyy", &["12345"], &IndicatorStyle::default());
        // 5 chars * 6px = 30px in a 28px cell
        assert_eq!(out.cells[0].text_origin.x, -1.0);
    }

    #[test]
    fn translated_moves_every_cell() {
        let out = run("HH:mm", &["01", ":", "02"], &IndicatorStyle::default())
            .translated(Vec2::new(10.0, 20.0));
        assert_eq!(out.cells[0].background, Some(Rect::new(10.0, 20.0, 28.0, 28.0)));
        assert_eq!(out.cells[1].text_origin, Vec2::new(38.0, 28.0));
        assert_eq!(out.size, Vec2::new(62.0, 28.0));
    }
}
