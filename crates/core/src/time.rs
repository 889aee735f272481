use std::time::{Duration, Instant};

/// A monotonic clock abstraction for deterministic playback timing in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Monotonic,
    Fixed(Instant),
}

impl Clock {
    /// Returns a clock backed by the system monotonic clock.
    #[must_use]
    pub fn monotonic() -> Self {
        Self::Monotonic
    }

    /// Returns a clock fixed at the given instant.
    #[must_use]
    pub fn fixed(at: Instant) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current instant according to the clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        match self {
            Clock::Monotonic => Instant::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Monotonic`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Returns a `Clock` fixed at the moment of the call, for tests.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(Instant::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_only_moves_when_advanced() {
        let mut clock = fixed_clock();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn advance_is_ignored_for_monotonic_clock() {
        let mut clock = Clock::monotonic();
        clock.advance(Duration::from_secs(60));
        assert_eq!(clock, Clock::Monotonic);
        assert!(!clock.is_fixed());
    }
}
