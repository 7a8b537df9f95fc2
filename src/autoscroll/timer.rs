use std::time::{Duration, Instant};

/// Fixed-period timer advanced by the host's clock instead of a background thread.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    /// First tick fires one period after `now`.
    pub fn start(now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next: now + period,
        }
    }
    /// Number of ticks that became due up to `now`. Each is counted once.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut n = 0;
        while self.next <= now {
            self.next += self.period;
            n += 1;
        }
        n
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn counts_elapsed_periods() {
        let t0 = Instant::now();
        let mut i = Interval::start(t0, Duration::from_millis(25));
        assert_eq!(i.due(t0 + Duration::from_millis(24)), 0);
        assert_eq!(i.due(t0 + Duration::from_millis(25)), 1);
        assert_eq!(i.due(t0 + Duration::from_millis(25)), 0);
        assert_eq!(i.due(t0 + Duration::from_millis(110)), 3);
    }
}
