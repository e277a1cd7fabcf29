use std::time::Duration;

/// Coalesces rapid updates into one, fired after a quiet period.
///
/// Only the most recent value survives. Time is supplied by the caller in
/// seconds (e.g. `macroquad::time::get_time`), so nothing here sleeps or
/// owns a timer.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.as_secs_f64(),
            pending: None,
        }
    }

    /// Record `value` as the latest and restart the quiet period
    pub fn push(&mut self, value: T, now: f64) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value once its quiet period has elapsed
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match self.pending.take() {
            Some((value, deadline)) if now >= deadline => Some(value),
            still_waiting => {
                self.pending = still_waiting;
                None
            }
        }
    }

    /// The value waiting to fire, if any
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }
}
