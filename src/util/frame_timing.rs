//! Frame pacing for the auto-rotation loop.

use web_time::{Duration, Instant};

/// Frame timer with a smoothed FPS estimate and optional frame limiting.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    /// Exponential moving average of the instantaneous FPS.
    smoothed_fps: f32,
    /// Weight of each new sample (0.0-1.0).
    smoothing: f32,
    frames: u64,
}

impl FrameTiming {
    /// Create a timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        #[allow(clippy::cast_precision_loss)]
        let initial_fps = if target_fps > 0 {
            target_fps as f32
        } else {
            60.0
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: initial_fps,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to produce
    /// another one.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left until the next frame is due (zero when unlimited).
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Mark the end of a frame. Returns the elapsed seconds since the
    /// previous one.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.remaining(), Duration::ZERO);
    }

    #[test]
    fn end_frame_counts_frames() {
        let mut timing = FrameTiming::new(60);
        let dt = timing.end_frame();
        assert!(dt >= 0.0);
        let _ = timing.end_frame();
        assert_eq!(timing.frame_count(), 2);
        assert!(timing.fps() > 0.0);
    }
}
