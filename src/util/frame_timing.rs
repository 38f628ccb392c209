use web_time::Instant;

/// Monotonic frame clock with smoothed FPS.
///
/// Time is reported in seconds since the clock was created, as `f64` so
/// long sessions keep sub-millisecond resolution.
pub struct FrameClock {
    /// Clock origin.
    start: Instant,
    /// Time of the previous tick, in seconds since `start`.
    last_tick: f64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_tick: 0.0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Seconds since the clock was created.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Mark the start of a frame. Returns the frame time and the seconds
    /// since the previous tick.
    pub fn tick(&mut self) -> (f64, f32) {
        let now = self.now();
        let dt = self.advance(now);
        (now, dt)
    }

    /// Mark a frame at an explicit time, for fixed-step simulation.
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = (now - self.last_tick).max(0.0) as f32;
        self.last_tick = now;
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
