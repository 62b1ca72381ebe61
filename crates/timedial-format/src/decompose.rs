use crate::token::{SlotKind, Token};

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
/// Fixed 30-day month. Not a calendar.
pub const MILLIS_PER_MONTH: u64 = 30 * MILLIS_PER_DAY;
/// Fixed 365-day year. Not a calendar.
pub const MILLIS_PER_YEAR: u64 = 365 * MILLIS_PER_DAY;

/// How a millisecond count is split into slot values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DisplayMode {
    /// Year/month/day/... with fixed 365-day years and 30-day months.
    #[default]
    Date,
    /// Days/hours/minutes/seconds only. Day count is unbounded.
    Duration,
}

/// Slot values for one instant.
///
/// Slots a mode does not produce are `None` and render as zero placeholders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct TimeFields {
    pub year: Option<u64>,
    pub month: Option<u64>,
    pub day: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
    pub millisecond: Option<u64>,
}

impl TimeFields {
    pub fn value(&self, kind: SlotKind) -> Option<u64> {
        match kind {
            SlotKind::Year        => self.year,
            SlotKind::Month       => self.month,
            SlotKind::Day         => Some(self.day),
            SlotKind::Hour        => Some(self.hour),
            SlotKind::Minute      => Some(self.minute),
            SlotKind::Second      => Some(self.second),
            SlotKind::Millisecond => self.millisecond,
        }
    }

    /// Zero-padded text for a slot.
    pub fn format(&self, kind: SlotKind, mode: DisplayMode) -> String {
        match (mode, self.value(kind)) {
            (DisplayMode::Date, Some(v)) => format!("{v:0w$}", w = kind.width()),
            (DisplayMode::Duration, Some(v)) => format!("{v:02}"),
            (_, None) if kind == SlotKind::Millisecond => "000".to_string(),
            (_, None) => "00".to_string(),
        }
    }

    /// Display text for `token`: the slot value, or the glyph itself for suffixes.
    pub fn text_for(&self, token: &Token, mode: DisplayMode) -> String {
        match token.slot_kind() {
            Some(kind) => self.format(kind, mode),
            None => token.pattern.to_string(),
        }
    }
}

/// Splits `millis` into slot values using fixed divisors.
///
/// Negative inputs are treated as zero.
pub fn decompose(millis: i64, mode: DisplayMode) -> TimeFields {
    let ms = millis.max(0) as u64;
    match mode {
        DisplayMode::Date => TimeFields {
            year: Some(ms / MILLIS_PER_YEAR),
            month: Some(ms % MILLIS_PER_YEAR / MILLIS_PER_MONTH),
            day: ms % MILLIS_PER_MONTH / MILLIS_PER_DAY,
            hour: ms % MILLIS_PER_DAY / MILLIS_PER_HOUR,
            minute: ms % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            second: ms % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
            millisecond: Some(ms % MILLIS_PER_SECOND),
        },
        DisplayMode::Duration => TimeFields {
            year: None,
            month: None,
            day: ms / MILLIS_PER_DAY,
            hour: ms % MILLIS_PER_DAY / MILLIS_PER_HOUR,
            minute: ms % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            second: ms % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
            millisecond: None,
        },
    }
}

/// Display texts for each token of a pattern, in token order.
pub fn display_texts(tokens: &[Token], millis: i64, mode: DisplayMode) -> Vec<String> {
    let fields = decompose(millis, mode);
    tokens.iter().map(|t| fields.text_for(t, mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use pretty_assertions::assert_eq;

    fn texts(ms: i64, mode: DisplayMode) -> Vec<String> {
        let f = decompose(ms, mode);
        SlotKind::ALL.iter().map(|&k| f.format(k, mode)).collect()
    }

    #[test]
    fn zero_in_date_mode() {
        assert_eq!(texts(0, DisplayMode::Date), ["0000", "00", "00", "00", "00", "00", "000"]);
    }

    #[test]
    fn one_day_one_hour_one_minute_one_second() {
        let f = decompose(90_061_000, DisplayMode::Duration);
        assert_eq!((f.day, f.hour, f.minute, f.second), (1, 1, 1, 1));
        assert_eq!(texts(90_061_000, DisplayMode::Duration), ["00", "00", "01", "01", "01", "01", "000"]);
    }

    #[test]
    fn same_value_in_date_mode() {
        assert_eq!(texts(90_061_000, DisplayMode::Date), ["0000", "00", "01", "01", "01", "01", "000"]);
    }

    #[test]
    fn date_mode_uses_fixed_divisors() {
        // 3 months, 4 days, 5h 6m 7s 89ms
        let ms = 3 * MILLIS_PER_MONTH + 4 * MILLIS_PER_DAY
            + 5 * MILLIS_PER_HOUR + 6 * MILLIS_PER_MINUTE + 7 * MILLIS_PER_SECOND + 89;
        assert_eq!(texts(ms as i64, DisplayMode::Date), ["0000", "03", "04", "05", "06", "07", "089"]);
    }

    #[test]
    fn day_is_taken_modulo_whole_count_not_year() {
        // 2y 3mo 4d is 824 days; 824 % 30 = 14, since 365 is not a multiple of 30.
        let ms = 2 * MILLIS_PER_YEAR + 3 * MILLIS_PER_MONTH + 4 * MILLIS_PER_DAY;
        assert_eq!(texts(ms as i64, DisplayMode::Date), ["0002", "03", "14", "00", "00", "00", "000"]);
    }

    #[test]
    fn duration_days_are_not_wrapped_by_month() {
        let f = decompose((45 * MILLIS_PER_DAY) as i64, DisplayMode::Duration);
        assert_eq!(f.day, 45);
        assert_eq!(f.format(SlotKind::Day, DisplayMode::Duration), "45");
        let f = decompose((123 * MILLIS_PER_DAY) as i64, DisplayMode::Duration);
        assert_eq!(f.format(SlotKind::Day, DisplayMode::Duration), "123");
    }

    #[test]
    fn negative_is_clamped() {
        assert_eq!(decompose(-5_000, DisplayMode::Date), decompose(0, DisplayMode::Date));
    }

    #[test]
    fn display_texts_follow_token_order() {
        let tokens = tokenize("HH:mm:ss").tokens;
        assert_eq!(display_texts(&tokens, 3_723_000, DisplayMode::Date), ["01", ":", "02", ":", "03"]);
    }
}
