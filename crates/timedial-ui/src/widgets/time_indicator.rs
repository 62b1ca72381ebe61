use std::rc::Rc;
use std::time::{Duration, Instant};

use timedial_engine::coords::{Rect, Vec2};
use timedial_engine::paint::Color;
use timedial_engine::text::TextMeasure;
use timedial_engine::time::{Tick, Ticker};
use timedial_format::{display_texts, tokenize, DisplayMode, Token, DEFAULT_PATTERN};

use crate::config::{resolve_display_mode, resolve_tick_interval, IndicatorConfig};
use crate::constraints::{Constraints, LayoutCtx};
use crate::layout::{layout_tokens, IndicatorLayout};
use crate::painter::Painter;
use crate::style::IndicatorStyle;
use crate::widget::Widget;

/// Immutable token + text pairing shown by a [`TimeIndicator`].
///
/// Every update builds a new frame and swaps it in whole, so a painter never
/// sees texts that belong to a different pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub pattern: String,
    pub tokens: Rc<[Token]>,
    pub texts: Vec<String>,
    /// Millisecond value the texts were decomposed from.
    pub value: i64,
}

impl IndicatorFrame {
    fn new(pattern: &str, tokens: Rc<[Token]>, value: i64, mode: DisplayMode) -> Self {
        let texts = display_texts(&tokens, value, mode);
        Self { pattern: pattern.to_string(), tokens, texts, value }
    }

    /// Same pattern, texts for a new value.
    fn with_value(&self, value: i64, mode: DisplayMode) -> Self {
        Self::new(&self.pattern, Rc::clone(&self.tokens), value, mode)
    }

    /// Concatenated display texts, e.g. `"2024-05-16 10:00:00"`.
    pub fn text(&self) -> String {
        self.texts.concat()
    }
}

/// A row of pointer cells and suffix glyphs showing a running clock or a
/// countdown.
///
/// # Example
/// ```rust,ignore
/// let mut indicator = TimeIndicator::new(IndicatorStyle::default())
///     .pattern("HH:mm:ss")
///     .countdown(true);
/// indicator.set_start_time(90_000);
/// indicator.start(Instant::now());
///
/// // host loop
/// if indicator.tick(Instant::now()) {
///     let (_, draw_list) = scene.frame(&indicator, Constraints::unbounded());
///     renderer.render(draw_list);
/// }
/// ```
pub struct TimeIndicator {
    style: IndicatorStyle,
    countdown: bool,
    display_override: Option<DisplayMode>,
    interval_override: Option<Duration>,
    start_time: i64,
    /// `None` when counting down from a start time that is not positive.
    ticker: Option<Ticker>,
    frame: Rc<IndicatorFrame>,
}

impl TimeIndicator {
    /// Forward clock with the default pattern, starting at zero.
    pub fn new(style: IndicatorStyle) -> Self {
        let mut indicator = Self {
            style,
            countdown: false,
            display_override: None,
            interval_override: None,
            start_time: 0,
            ticker: None,
            frame: Rc::new(IndicatorFrame::new("", Rc::from(Vec::<Token>::new()), 0, DisplayMode::Date)),
        };
        indicator.set_pattern(DEFAULT_PATTERN);
        indicator.rebuild_ticker();
        indicator
    }

    pub fn from_config(config: &IndicatorConfig) -> Self {
        let mut indicator = Self::new(config.style.clone());
        indicator.countdown = config.countdown;
        indicator.display_override = config.display.map(Into::into);
        indicator.interval_override = config.tick_interval_ms.map(Duration::from_millis);
        let pattern = if config.pattern.is_empty() { DEFAULT_PATTERN } else { config.pattern.as_str() };
        indicator.set_pattern(pattern);
        indicator.set_start_time(config.start_time.unwrap_or(0));
        indicator
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.set_pattern(pattern);
        self
    }

    pub fn countdown(mut self, countdown: bool) -> Self {
        self.set_countdown(countdown);
        self
    }

    pub fn display_mode_override(mut self, mode: DisplayMode) -> Self {
        self.display_override = Some(mode);
        self.refresh(self.frame.value);
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.interval_override = Some(interval);
        self.rebuild_ticker();
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    pub fn is_countdown(&self) -> bool {
        self.countdown
    }

    pub fn display_mode(&self) -> DisplayMode {
        resolve_display_mode(self.countdown, self.display_override)
    }

    pub fn interval(&self) -> Duration {
        resolve_tick_interval(self.countdown, self.interval_override)
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// The current snapshot. Stays valid after later updates.
    pub fn frame(&self) -> Rc<IndicatorFrame> {
        Rc::clone(&self.frame)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.frame.tokens
    }

    pub fn display_texts(&self) -> &[String] {
        &self.frame.texts
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    /// `false` when no timer exists (countdown from a non-positive start).
    pub fn has_timer(&self) -> bool {
        self.ticker.is_some()
    }

    /// When the host should next call [`tick`](Self::tick).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().and_then(Ticker::next_deadline)
    }

    pub fn pointer_text_size(&self) -> f32 {
        self.style.pointer_text_size
    }

    pub fn suffix_text_size(&self) -> f32 {
        self.style.suffix_text_size
    }

    // ── pattern & mode ────────────────────────────────────────────────────

    /// Re-tokenizes `pattern` and shows the current value with it.
    pub fn set_pattern(&mut self, pattern: &str) {
        let out = tokenize(pattern);
        if out.truncated {
            log::warn!("pattern {pattern:?} truncated after {} tokens", out.tokens.len());
        }
        if !out.skipped.is_empty() {
            log::warn!("pattern {pattern:?}: ignored characters at byte offsets {:?}", out.skipped);
        }
        log::debug!("pattern {pattern:?} -> {} tokens", out.tokens.len());

        let tokens: Rc<[Token]> = out.tokens.into();
        self.frame = Rc::new(IndicatorFrame::new(pattern, tokens, self.frame.value, self.display_mode()));
    }

    /// Switches between forward and countdown. The timer is rebuilt stopped.
    pub fn set_countdown(&mut self, countdown: bool) {
        self.countdown = countdown;
        self.rebuild_ticker();
        self.refresh(self.start_time);
    }

    /// Sets the starting value: epoch millis for a forward clock, remaining
    /// millis for a countdown. The timer is rebuilt stopped and the value is
    /// shown immediately.
    pub fn set_start_time(&mut self, millis: i64) {
        self.start_time = millis;
        self.rebuild_ticker();
        self.refresh(millis);
    }

    // ── timer ─────────────────────────────────────────────────────────────

    /// Starts ticking from the start time, replacing any running schedule.
    pub fn start(&mut self, now: Instant) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.start(now);
                self.refresh(self.start_time);
            }
            None => log::debug!("start ignored: no timer for start time {}", self.start_time),
        }
    }

    /// Cancels ticking. Safe to call repeatedly or before `start`.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
    }

    /// Polls the timer and updates the texts. Returns `true` if they changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tick) = self.ticker.as_mut().and_then(|t| t.poll(now)) else {
            return false;
        };
        let value = self.value_for(&tick);
        let before = self.frame.texts.clone();
        self.refresh(value);
        before != self.frame.texts
    }

    fn value_for(&self, tick: &Tick) -> i64 {
        match tick.remaining {
            Some(remaining) if self.countdown => duration_millis(remaining),
            _ => self.start_time.saturating_add(duration_millis(tick.elapsed)),
        }
    }

    fn rebuild_ticker(&mut self) {
        if let Some(old) = self.ticker.as_mut() {
            old.stop();
        }
        let interval = self.interval();
        self.ticker = if !self.countdown {
            Some(Ticker::new(interval))
        } else if self.start_time > 0 {
            Some(Ticker::bounded(interval, Duration::from_millis(self.start_time as u64)))
        } else {
            None
        };
    }

    fn refresh(&mut self, value: i64) {
        self.frame = Rc::new(self.frame.with_value(value, self.display_mode()));
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn set_pointer_text_size(&mut self, size: f32) {
        self.style.pointer_text_size = size;
    }

    pub fn set_pointer_text_color(&mut self, color: Color) {
        self.style.pointer_text_color = color;
    }

    pub fn set_suffix_text_size(&mut self, size: f32) {
        self.style.suffix_text_size = size;
    }

    pub fn set_suffix_text_color(&mut self, color: Color) {
        self.style.suffix_text_color = color;
    }

    pub fn set_style(&mut self, style: IndicatorStyle) {
        self.style = style;
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Lays out the current frame with its top-left at the origin.
    pub fn layout(&self, measure: &dyn TextMeasure) -> IndicatorLayout {
        layout_tokens(&self.frame.tokens, &self.frame.texts, &self.style, measure)
    }
}

fn duration_millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

impl Widget for TimeIndicator {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.layout(ctx.text).size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let layout = self.layout(painter.layout_ctx().text).translated(rect.origin);
        let pointer = self.style.pointer_text_style();
        let suffix = self.style.suffix_text_style();

        for cell in &layout.cells {
            match cell.background {
                Some(bg) => {
                    painter.fill_rounded_rect(bg, self.style.pointer_radius, self.style.pointer_background);
                    painter.text(&cell.display_text, pointer, cell.text_origin);
                }
                None => painter.text(&cell.display_text, suffix, cell.text_origin),
            }
        }
    }
}
