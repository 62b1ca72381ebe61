// ── SlotKind ──────────────────────────────────────────────────────────────

/// A time field rendered inside a pointer cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SlotKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl SlotKind {
    /// All slot kinds in vocabulary priority order.
    pub const ALL: [SlotKind; 7] = [
        SlotKind::Year,
        SlotKind::Month,
        SlotKind::Day,
        SlotKind::Hour,
        SlotKind::Minute,
        SlotKind::Second,
        SlotKind::Millisecond,
    ];

    /// The pattern text that selects this slot.
    pub const fn pattern(self) -> &'static str {
        match self {
            SlotKind::Year        => "yyyy",
            SlotKind::Month       => "MM",
            SlotKind::Day         => "dd",
            SlotKind::Hour        => "HH",
            SlotKind::Minute      => "mm",
            SlotKind::Second      => "ss",
            SlotKind::Millisecond => "SSS",
        }
    }

    /// Minimum number of digits shown for this slot.
    pub const fn width(self) -> usize {
        match self {
            SlotKind::Year        => 4,
            SlotKind::Millisecond => 3,
            _                     => 2,
        }
    }
}

/// Literal separator glyphs recognized between slots.
pub const SUFFIX_GLYPHS: [&str; 11] = [
    "-", ":", "/", ".", "年", "月", "日", "时", "分", "秒", " ",
];

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    /// A value slot, drawn as a pointer cell.
    Slot(SlotKind),
    /// A literal glyph, drawn as plain text.
    Suffix,
}

/// One element of a tokenized pattern.
///
/// Identity is the token's position in the sequence; the same token may
/// appear any number of times.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub pattern: &'static str,
    pub kind: TokenKind,
}

impl Token {
    pub const fn slot(kind: SlotKind) -> Self {
        Self { pattern: kind.pattern(), kind: TokenKind::Slot(kind) }
    }

    pub const fn suffix(glyph: &'static str) -> Self {
        Self { pattern: glyph, kind: TokenKind::Suffix }
    }

    #[inline]
    pub fn is_value_slot(&self) -> bool {
        matches!(self.kind, TokenKind::Slot(_))
    }

    #[inline]
    pub fn slot_kind(&self) -> Option<SlotKind> {
        match self.kind {
            TokenKind::Slot(k) => Some(k),
            TokenKind::Suffix  => None,
        }
    }
}

/// The full vocabulary: slots first, then suffix glyphs.
pub(crate) fn vocabulary() -> impl Iterator<Item = Token> {
    SlotKind::ALL
        .into_iter()
        .map(Token::slot)
        .chain(SUFFIX_GLYPHS.into_iter().map(Token::suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_patterns_are_case_sensitive() {
        assert_eq!(SlotKind::Month.pattern(), "MM");
        assert_eq!(SlotKind::Minute.pattern(), "mm");
        assert_eq!(SlotKind::Millisecond.pattern(), "SSS");
        assert!(vocabulary().all(|t| t.pattern != "YYYY"));
    }

    #[test]
    fn vocabulary_has_eighteen_entries() {
        assert_eq!(vocabulary().count(), 18);
        assert_eq!(vocabulary().filter(Token::is_value_slot).count(), 7);
    }

    #[test]
    fn cjk_glyphs_are_suffixes() {
        let suffixes: Vec<_> = vocabulary().filter(|t| !t.is_value_slot()).map(|t| t.pattern).collect();
        assert!(suffixes.contains(&"年"));
        assert!(suffixes.contains(&" "));
        assert!(!suffixes.contains(&"x"));
    }
}
