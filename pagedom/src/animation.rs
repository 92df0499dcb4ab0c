use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::element::{Content, Element};
use crate::transitions::Fade;

/// A fade that started when its element mounted.
#[derive(Debug, Clone, Copy)]
struct ActiveFade {
    fade: Fade,
    start: Instant,
}

/// Tracks mount times of fading elements across frames.
///
/// An element with a [`Fade`] starts its transition the first frame its id
/// appears. When it leaves the tree its entry is dropped, so a later remount
/// fades in again from the start.
#[derive(Debug, Default)]
pub struct AnimationState {
    fades: HashMap<String, ActiveFade>,
    /// Reduced motion flag - when true, fades resolve to their final opacity.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Record newly mounted fading elements and forget unmounted ones.
    pub fn update(&mut self, root: &Element, now: Instant) {
        let mut seen = HashSet::new();
        self.update_element(root, now, &mut seen);

        let before = self.fades.len();
        self.fades.retain(|id, _| seen.contains(id));
        let removed = before - self.fades.len();
        if removed > 0 {
            log::trace!("dropped {removed} unmounted fade(s)");
        }
    }

    fn update_element(&mut self, element: &Element, now: Instant, seen: &mut HashSet<String>) {
        if let Some(fade) = element.fade {
            seen.insert(element.id.clone());
            self.fades.entry(element.id.clone()).or_insert_with(|| {
                log::debug!("fade start: {} ({:?} delay)", element.id, fade.delay);
                ActiveFade { fade, start: now }
            });
        }

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now, seen);
            }
        }
    }

    /// Current opacity of an element, or `None` if it has no fade.
    pub fn opacity(&self, element_id: &str, now: Instant) -> Option<f32> {
        let active = self.fades.get(element_id)?;
        if self.reduced_motion {
            return Some(active.fade.to);
        }
        Some(active.fade.opacity_at(now.saturating_duration_since(active.start)))
    }

    /// Returns true if any fade has not yet settled.
    pub fn has_active_transitions(&self, now: Instant) -> bool {
        if self.reduced_motion {
            return false;
        }
        self.fades
            .values()
            .any(|active| now.saturating_duration_since(active.start) < active.fade.total())
    }
}
