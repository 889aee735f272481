use std::time::{Duration, Instant};

/// One sample of a running timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerTick {
    /// Fill of the active segment, clamped to `0.0..=100.0`.
    pub percent: f64,
    /// Set on exactly one tick: the first one at or past the duration.
    pub expired: bool,
}

/// Per-item countdown sampled from absolute elapsed time.
///
/// Progress is always `now - start`, never a sum of per-tick deltas, so
/// irregular tick spacing cannot make it drift.
#[derive(Debug, Clone)]
pub struct PlaybackTimer {
    duration: Duration,
    started_at: Option<Instant>,
}

impl PlaybackTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Record `now` as the start. Restarts a running timer from zero.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop ticking. No-op when not running.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Sample the timer. Returns `None` once stopped or expired.
    pub fn tick(&mut self, now: Instant) -> Option<TimerTick> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);
        let expired = elapsed >= self.duration;
        if expired {
            self.started_at = None;
        }
        Some(TimerTick {
            percent: progress_percent(elapsed, self.duration),
            expired,
        })
    }
}

/// `elapsed` as a percentage of `duration`, clamped to 100.
#[must_use]
pub fn progress_percent(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 100.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0).min(100.0)
}
