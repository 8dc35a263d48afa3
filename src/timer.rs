use std::time::{Duration, Instant};

/// Timeout that is polled once per frame instead of firing on its own.
///
/// The caller supplies the current instant, so a whole frame sees one
/// consistent clock reading.
#[derive(Debug, Clone)]
pub struct PoolingTimer {
    period: Duration,
    started_at: Option<Instant>,
}

impl PoolingTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, started_at: None }
    }

    /// (Re)start counting from `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// True once strictly more than the period has passed since `start`.
    /// A timer that was never started never times out.
    pub fn is_timed_out(&self, now: Instant) -> bool {
        self.is_started() && self.elapsed(now) > self.period
    }
}
