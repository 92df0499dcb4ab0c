use std::time::Duration;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Opacity transition played when an element first appears in the tree.
///
/// The element holds `from` until `delay` has elapsed, then moves to `to`
/// over `duration`. There is no exit transition: an element removed from
/// the tree disappears on the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            delay: Duration::ZERO,
            duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
        }
    }
}

impl Fade {
    /// A fade from fully transparent to fully opaque.
    pub fn fade_in() -> Self {
        Self::default()
    }

    pub fn initial(mut self, opacity: f32) -> Self {
        self.from = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn target(mut self, opacity: f32) -> Self {
        self.to = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total time from mount until the fade settles.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Opacity `elapsed` after the element mounted.
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return self.from;
        }
        let running = elapsed - self.delay;
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }
}
