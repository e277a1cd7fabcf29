use std::time::Duration;

/// Accumulates frame time and says when a generation is due.
/// At most one generation per tick; leftover time is dropped.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    interval: f32,
    elapsed: f32,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.as_secs_f32();
    }

    /// Advance by `delta_time` seconds; true when a generation should run
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.elapsed += delta_time;
        }
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
