//! Frame rate measurement
//!
//! Frames are counted over a window; once the accumulated time passes the
//! window length, the rate is published and a new window starts.

/// Windowed frames-per-second counter
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_secs: f64,
    frame_count: u32,
    elapsed: f64,
    fps: f64,
}

impl FpsCounter {
    pub fn new(window_secs: f64) -> Self {
        Self {
            window_secs,
            frame_count: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame that took `dt` seconds. Returns the new rate when a window closes.
    pub fn record(&mut self, dt: f64) -> Option<f64> {
        self.frame_count += 1;
        self.elapsed += dt;

        if self.elapsed > self.window_secs {
            self.fps = self.frame_count as f64 / self.elapsed;
            log::debug!(
                "FPS {:.1} ({} frames in {:.3}s)",
                self.fps,
                self.frame_count,
                self.elapsed
            );
            self.frame_count = 0;
            self.elapsed = 0.0;
            return Some(self.fps);
        }
        None
    }

    /// Rate from the last completed window (0 until the first window closes)
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(crate::consts::FPS_WINDOW_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_until_window_closes() {
        let mut fps = FpsCounter::default();
        for _ in 0..10 {
            assert_eq!(fps.record(0.05), None);
        }
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn test_window_publishes_rate() {
        let mut fps = FpsCounter::new(1.0);
        let mut published = None;
        // 0.25s frames: the window closes on the fifth frame (1.25s)
        for _ in 0..5 {
            published = fps.record(0.25);
        }
        assert_eq!(published, Some(4.0));
        assert_eq!(fps.fps(), 4.0);
    }

    #[test]
    fn test_window_exactly_at_limit_stays_open() {
        let mut fps = FpsCounter::new(1.0);
        assert_eq!(fps.record(0.5), None);
        assert_eq!(fps.record(0.5), None);
        assert!(fps.record(0.5).is_some());
    }

    #[test]
    fn test_rate_holds_between_windows() {
        let mut fps = FpsCounter::new(1.0);
        fps.record(1.5);
        let first = fps.fps();
        fps.record(0.1);
        assert_eq!(fps.fps(), first);
    }
}
