/// Wall-clock bookkeeping for the display-synced loop.
///
/// The simulation itself steps once per frame and never looks at time;
/// the clock only timestamps cosmetic effects such as hit flashes.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds elapsed across all frames.
    elapsed: f64,
    /// Frames counted so far.
    frames: u64,
    /// Longest delta accepted for a single frame.
    max_dt: f32,
}

impl FrameClock {
    /// Frame deltas above this are clamped (e.g. after a background tab).
    pub const DEFAULT_MAX_DT: f32 = 0.25;

    pub fn new() -> Self {
        Self::with_max_dt(Self::DEFAULT_MAX_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            elapsed: 0.0,
            frames: 0,
            max_dt,
        }
    }

    /// Record one displayed frame that took `frame_dt` seconds.
    /// Negative or non-finite deltas count as zero. Returns the new time.
    pub fn advance(&mut self, frame_dt: f32) -> f64 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        self.elapsed
    }

    /// Seconds elapsed.
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_frame_time() {
        let mut clock = FrameClock::new();
        clock.advance(1.0 / 60.0);
        clock.advance(1.0 / 60.0);
        assert!((clock.now() - 2.0 / 60.0).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = FrameClock::new();
        clock.advance(5.0);
        assert!((clock.now() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn ignores_bad_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.frames(), 2);
    }
}
