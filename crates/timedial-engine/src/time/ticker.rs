use std::time::{Duration, Instant};

/// One delivered tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Time since `start`, rounded down to whole intervals except on the final tick.
    pub elapsed: Duration,
    /// Time left for bounded tickers; `None` when unbounded.
    pub remaining: Option<Duration>,
    /// `true` on the last tick of a bounded ticker.
    pub finished: bool,
    /// Generation of the schedule that produced this tick.
    pub generation: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickerState {
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone)]
struct Schedule {
    started: Instant,
    /// Number of intervals already delivered.
    delivered: u64,
}

/// Cancellable periodic tick source.
///
/// Polled by the host loop; never spawns threads or sleeps. Starting while
/// running cancels the old schedule and replaces it, so there is never more
/// than one live schedule. Stopping is idempotent.
///
/// Missed intervals are coalesced: a late `poll` yields one tick carrying the
/// latest elapsed time.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    total: Option<Duration>,
    schedule: Option<Schedule>,
    finished: bool,
    generation: u64,
}

impl Ticker {
    /// Unbounded ticker firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            total: None,
            schedule: None,
            finished: false,
            generation: 0,
        }
    }

    /// Ticker that finishes after `total` has elapsed.
    pub fn bounded(interval: Duration, total: Duration) -> Self {
        Self { total: Some(total), ..Self::new(interval) }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn total(&self) -> Option<Duration> {
        self.total
    }

    /// Generation of the current (or last) schedule. Bumped by every `start`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> TickerState {
        match (&self.schedule, self.finished) {
            (Some(_), _) => TickerState::Running,
            (None, true) => TickerState::Finished,
            (None, false) => TickerState::Idle,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Begins a new schedule at `now`, cancelling any running one.
    pub fn start(&mut self, now: Instant) {
        if self.schedule.is_some() {
            log::debug!("ticker generation {} replaced", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
        self.finished = false;
        self.schedule = Some(Schedule { started: now, delivered: 0 });
        log::debug!("ticker generation {} started ({:?} interval)", self.generation, self.interval);
    }

    /// Cancels the running schedule. No-op when idle.
    pub fn stop(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("ticker generation {} stopped", self.generation);
        }
    }

    /// Returns a tick if at least one interval boundary passed since the last
    /// delivered tick.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        let generation = self.generation;
        let interval = self.interval;
        let total = self.total;
        let since = now.saturating_duration_since(self.schedule.as_ref()?.started);

        if let Some(total) = total {
            if since >= total {
                self.schedule = None;
                self.finished = true;
                log::debug!("ticker generation {generation} finished");
                return Some(Tick {
                    elapsed: total,
                    remaining: Some(Duration::ZERO),
                    finished: true,
                    generation,
                });
            }
        }

        let schedule = self.schedule.as_mut()?;
        let due = (since.as_nanos() / interval.as_nanos()) as u64;
        if due <= schedule.delivered {
            return None;
        }
        schedule.delivered = due;

        let elapsed = intervals(interval, due);
        Some(Tick {
            elapsed,
            remaining: total.map(|t| t.saturating_sub(elapsed)),
            finished: false,
            generation,
        })
    }

    /// Instant of the next interval boundary, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        let s = self.schedule.as_ref()?;
        let next = intervals(self.interval, s.delivered + 1);
        let next = match self.total {
            Some(total) => next.min(total),
            None => next,
        };
        Some(s.started + next)
    }
}

/// `interval × n` without the `u32` multiplier limit of `Duration::mul`.
fn intervals(interval: Duration, n: u64) -> Duration {
    let nanos = interval.as_nanos().saturating_mul(u128::from(n));
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn idle_ticker_never_ticks() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(20));
        assert_eq!(t.poll(t0 + ms(100)), None);
        assert_eq!(t.state(), TickerState::Idle);
    }

    #[test]
    fn ticks_once_per_interval() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(20));
        t.start(t0);
        assert_eq!(t.poll(t0 + ms(10)), None);
        assert_eq!(t.poll(t0 + ms(20)).map(|k| k.elapsed), Some(ms(20)));
        assert_eq!(t.poll(t0 + ms(25)), None);
        assert_eq!(t.poll(t0 + ms(41)).map(|k| k.elapsed), Some(ms(40)));
    }

    #[test]
    fn late_poll_coalesces() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(20));
        t.start(t0);
        let tick = t.poll(t0 + ms(205)).unwrap();
        assert_eq!(tick.elapsed, ms(200));
        assert_eq!(t.poll(t0 + ms(210)), None);
    }

    #[test]
    fn elapsed_keeps_growing_past_u32_intervals() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(1));
        t.start(t0);
        // 60 days of 1 ms intervals is more than u32::MAX intervals.
        let sixty_days = Duration::from_secs(60 * 86_400);
        let tick = t.poll(t0 + sixty_days).unwrap();
        assert_eq!(tick.elapsed, sixty_days);
        assert_eq!(t.next_deadline(), Some(t0 + sixty_days + ms(1)));
    }

    #[test]
    fn restart_replaces_schedule() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(20));
        t.start(t0);
        t.start(t0 + ms(100));
        assert_eq!(t.generation(), 2);
        // Measured from the second start.
        let tick = t.poll(t0 + ms(120)).unwrap();
        assert_eq!(tick.elapsed, ms(20));
        assert_eq!(tick.generation, 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(20));
        t.stop();
        t.start(t0);
        t.stop();
        t.stop();
        assert_eq!(t.state(), TickerState::Idle);
        assert_eq!(t.poll(t0 + ms(100)), None);
    }

    #[test]
    fn bounded_ticker_finishes_once() {
        let t0 = Instant::now();
        let mut t = Ticker::bounded(ms(1000), ms(2500));
        t.start(t0);
        let tick = t.poll(t0 + ms(1000)).unwrap();
        assert_eq!(tick.remaining, Some(ms(1500)));
        let last = t.poll(t0 + ms(3000)).unwrap();
        assert!(last.finished);
        assert_eq!(last.remaining, Some(Duration::ZERO));
        assert_eq!(t.state(), TickerState::Finished);
        assert_eq!(t.poll(t0 + ms(4000)), None);
    }

    #[test]
    fn next_deadline_clamps_to_total() {
        let t0 = Instant::now();
        let mut t = Ticker::bounded(ms(1000), ms(1500));
        assert_eq!(t.next_deadline(), None);
        t.start(t0);
        assert_eq!(t.next_deadline(), Some(t0 + ms(1000)));
        t.poll(t0 + ms(1000));
        assert_eq!(t.next_deadline(), Some(t0 + ms(1500)));
    }
}
