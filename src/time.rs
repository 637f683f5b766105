//! Frame timing.
//!
//! A single source of truth for elapsed and delta time, driven by one
//! [`Time::update`] per frame. A fixed delta can be set for deterministic
//! stepping in tests and headless demos.

use std::time::Instant;

/// Tracks elapsed time, per-frame delta and the frame counter.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fixed_delta: Option<f32>,
}

impl Time {
    /// Create a tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Advance to the next frame. Call once per frame; returns
    /// `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        match self.fixed_delta {
            Some(fixed) => {
                self.delta_secs = fixed;
                self.elapsed_secs += fixed;
            }
            None => {
                self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
            }
        }

        self.last_frame = now;
        self.frame_count += 1;

        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since the last frame.
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Seconds since the tracker was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Frames seen so far.
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Use a fixed delta per frame instead of wall-clock time. Pass `None`
    /// to return to real time.
    pub fn set_fixed_delta(&mut self, fixed: Option<f32>) {
        self.fixed_delta = fixed;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.delta(), 0.0);
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = time.update();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_fixed_delta() {
        let mut time = Time::new();
        time.set_fixed_delta(Some(1.0 / 60.0));

        thread::sleep(Duration::from_millis(50));
        time.update();

        // Fixed delta ignores actual wall time
        let expected = 1.0 / 60.0;
        assert!((time.delta() - expected).abs() < 0.0001);

        time.update();
        assert!((time.elapsed() - 2.0 * expected).abs() < 0.0001);
    }
}
