//! Runtime configuration.

use std::time::Duration;

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for [`Runtime`](super::Runtime).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Show content immediately instead of fading it in.
    pub reduced_motion: bool,

    /// Time between frames while a fade is running.
    pub frame_interval: Duration,

    /// How long a fade runs once its delay has elapsed.
    pub fade_duration: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            frame_interval: Duration::from_millis(16),
            fade_duration: Duration::from_millis(300),
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Set the frame rate used while fades are running.
    pub fn fps(mut self, fps: u16) -> Self {
        self.frame_interval = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        self
    }

    /// Set the time between frames. Clamped to at least 1 ms.
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval.max(MIN_FRAME_INTERVAL);
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }
}
