use std::time::{Duration, Instant};

/// Ticker settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    /// Time between ticks.
    pub interval: Duration,
    /// Upper bound on elapsed time accounted per call, so a stalled loop
    /// doesn't replay a burst of ticks.
    pub max_catch_up: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(10),
            max_catch_up: Duration::from_millis(250),
        }
    }
}

impl TickerConfig {
    pub fn interval(mut self, v: Duration) -> Self {
        self.interval = v;
        self
    }

    pub fn max_catch_up(mut self, v: Duration) -> Self {
        self.max_catch_up = v;
        self
    }
}

/// Fixed-interval tick source.
///
/// The ticker owns no thread. Feed it elapsed time through
/// [`advance`](Self::advance) or wall-clock readings through
/// [`poll`](Self::poll); it reports how many ticks fell due. A stopped ticker
/// always reports zero.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    max_catch_up: Duration,
    running: bool,
    accumulated: Duration,
    last_poll: Option<Instant>,
    ticks: u64,
}

impl Ticker {
    pub fn new(config: TickerConfig) -> Self {
        let default = TickerConfig::default();
        let interval = if config.interval.is_zero() {
            log::warn!("zero ticker interval; using {:?}", default.interval);
            default.interval
        } else {
            config.interval
        };
        Self {
            interval,
            max_catch_up: config.max_catch_up.max(interval),
            running: false,
            accumulated: Duration::ZERO,
            last_poll: None,
            ticks: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total ticks reported since creation.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("ticker started ({:?})", self.interval);
        }
        self.running = true;
    }

    /// Stops ticking and drops any partially accumulated interval.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("ticker stopped after {} ticks", self.ticks);
        }
        self.running = false;
        self.accumulated = Duration::ZERO;
        self.last_poll = None;
    }

    /// Accounts `elapsed` time and returns the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated += elapsed.min(self.max_catch_up);

        let mut due = 0u32;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due = due.saturating_add(1);
        }
        self.ticks = self.ticks.wrapping_add(due as u64);
        if due > 0 {
            log::trace!("{due} tick(s) due");
        }
        due
    }

    /// Wall-clock variant of [`advance`](Self::advance). The first poll after
    /// `start` only records the baseline.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let elapsed = match self.last_poll.replace(now) {
            Some(prev) => now.saturating_duration_since(prev),
            None => Duration::ZERO,
        };
        self.advance(elapsed)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn running() -> Ticker {
        let mut t = Ticker::default();
        t.start();
        t
    }

    #[test]
    fn stopped_ticker_reports_nothing() {
        let mut t = Ticker::default();
        assert_eq!(t.advance(ms(100)), 0);
        t.start();
        t.stop();
        assert_eq!(t.advance(ms(100)), 0);
    }

    #[test]
    fn partial_intervals_accumulate() {
        let mut t = running();
        assert_eq!(t.advance(ms(4)), 0);
        assert_eq!(t.advance(ms(4)), 0);
        assert_eq!(t.advance(ms(4)), 1);
        assert_eq!(t.advance(ms(25)), 2);
        assert_eq!(t.tick_count(), 3);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut t = running();
        assert_eq!(t.advance(Duration::from_secs(10)), 25);
    }

    #[test]
    fn stop_discards_remainder() {
        let mut t = running();
        t.advance(ms(9));
        t.stop();
        t.start();
        assert_eq!(t.advance(ms(2)), 0);
    }

    #[test]
    fn poll_uses_first_call_as_baseline() {
        let mut t = running();
        let base = Instant::now();
        assert_eq!(t.poll(base), 0);
        assert_eq!(t.poll(base + ms(30)), 3);
    }

    #[test]
    fn zero_interval_falls_back() {
        let t = Ticker::new(TickerConfig::default().interval(Duration::ZERO));
        assert_eq!(t.interval(), ms(10));
    }
}
