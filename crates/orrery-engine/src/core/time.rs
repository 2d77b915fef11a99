/// Slack allowed when deciding whether a target frame interval has elapsed.
/// Platform frame callbacks jitter around the display rate; without it a
/// 60 Hz display would drop every other frame at a 60 FPS target.
const FRAME_SLACK: f32 = 0.001;

/// Monotonic simulation clock.
/// Seconds elapsed since start, advanced once per frame by the measured delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advance by `dt` seconds. Negative or non-finite deltas are dropped so
    /// the clock never runs backwards. Returns the new elapsed time.
    pub fn advance(&mut self, dt: f32) -> f64 {
        if dt.is_finite() && dt >= 0.0 {
            self.elapsed += dt as f64;
        } else {
            log::warn!("clock: ignoring invalid frame delta {dt}");
        }
        self.elapsed
    }

    /// Seconds elapsed since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Variable-timestep frame limiter.
///
/// Platform frame callbacks can arrive faster than the target rate (high
/// refresh displays). The limiter accumulates their deltas and releases a
/// single tick carrying the whole measured duration once the target interval
/// has elapsed. Long frames are released as-is; they are never split or capped.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    /// Minimum duration between released ticks.
    interval: f32,
    /// Time accumulated since the last released tick.
    accumulator: f32,
}

impl FrameLimiter {
    /// Create a limiter for `target_fps` frames per second.
    /// A non-positive target disables limiting.
    pub fn new(target_fps: f32) -> Self {
        let interval = if target_fps > 0.0 { 1.0 / target_fps } else { 0.0 };
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Add a platform frame delta. Returns `Some(dt)` with the measured
    /// duration when a tick is due, `None` while still waiting.
    pub fn accumulate(&mut self, frame_dt: f32) -> Option<f32> {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return None;
        }
        self.accumulator += frame_dt;
        if self.accumulator + FRAME_SLACK >= self.interval {
            Some(std::mem::take(&mut self.accumulator))
        } else {
            None
        }
    }

    /// Target duration between ticks in seconds.
    pub fn interval(&self) -> f32 {
        self.interval
    }
}
