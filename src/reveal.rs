//! One-shot reveal animations for skill bars and page sections.

use std::collections::HashSet;

pub const SKILL_BAR_THRESHOLD: f64 = 0.3;
pub const SECTION_THRESHOLD: f64 = 0.12;
/// Gap between resetting a skill bar to 0% and growing it to its target.
pub const SKILL_BAR_DELAY_MS: u32 = 120;

pub const SECTION_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(18px); transition: opacity 0.6s ease, transform 0.6s ease;";
pub const SECTION_SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

/// Remembers which targets have fired so repeated visibility changes are
/// ignored.
#[derive(Debug, Default)]
pub struct OneShotTracker {
    fired: HashSet<usize>,
}

impl OneShotTracker {
    /// Returns `true` the first time `target` becomes visible and never again.
    pub fn observe(&mut self, target: usize, intersecting: bool) -> bool {
        intersecting && self.fired.insert(target)
    }

    #[cfg(test)]
    fn has_fired(&self, target: usize) -> bool {
        self.fired.contains(&target)
    }
}

pub fn skill_bar_width(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_target() {
        let mut tracker = OneShotTracker::default();

        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(!tracker.observe(0, true));
        assert!(tracker.observe(1, true));
        assert!(tracker.has_fired(0) && tracker.has_fired(1));
    }

    #[test]
    fn width_is_capped_at_full() {
        assert_eq!(skill_bar_width(0), "width: 0%;");
        assert_eq!(skill_bar_width(85), "width: 85%;");
        assert_eq!(skill_bar_width(140), "width: 100%;");
    }
}
