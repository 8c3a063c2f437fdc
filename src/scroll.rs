pub const HEADER_SCROLLED_OFFSET: f64 = 80.0;
pub const BACK_TO_TOP_OFFSET: f64 = 600.0;
pub const ANCHOR_EXTRA_GAP: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            header_scrolled: offset > HEADER_SCROLLED_OFFSET,
            back_to_top_visible: offset > BACK_TO_TOP_OFFSET,
        }
    }
}

/// Collapses a burst of scroll samples into a single update per frame.
///
/// `record` stores the newest offset and reports whether a frame callback has
/// to be requested; `flush` runs inside that callback and re-arms the tracker.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    latest: f64,
    ticking: bool,
}

impl ScrollCoalescer {
    pub fn record(&mut self, offset: f64) -> bool {
        self.latest = offset;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn flush(&mut self) -> ScrollState {
        self.ticking = false;
        ScrollState::at_offset(self.latest)
    }

    #[cfg(test)]
    fn is_ticking(&self) -> bool {
        self.ticking
    }
}

/// Returns the section id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Document offset that puts an element just below the fixed header.
pub fn anchor_scroll_top(element_top: f64, page_offset: f64, header_height: f64) -> f64 {
    element_top + page_offset - header_height - ANCHOR_EXTRA_GAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_greater_than() {
        assert_eq!(ScrollState::at_offset(0.0), ScrollState::default());
        assert!(!ScrollState::at_offset(80.0).header_scrolled);
        assert!(ScrollState::at_offset(80.5).header_scrolled);
        assert!(!ScrollState::at_offset(600.0).back_to_top_visible);
        assert_eq!(
            ScrollState::at_offset(601.0),
            ScrollState {
                header_scrolled: true,
                back_to_top_visible: true,
            }
        );
    }

    #[test]
    fn state_matches_thresholds_across_offsets() {
        for step in 0..=2_000 {
            let offset = f64::from(step) * 0.5;
            let state = ScrollState::at_offset(offset);
            assert_eq!(state.header_scrolled, offset > 80.0);
            assert_eq!(state.back_to_top_visible, offset > 600.0);
        }
    }

    #[test]
    fn burst_requests_a_single_frame_and_uses_latest_sample() {
        let mut coalescer = ScrollCoalescer::default();

        assert!(coalescer.record(10.0));
        assert!(!coalescer.record(300.0));
        assert!(!coalescer.record(700.0));
        assert!(coalescer.is_ticking());

        let state = coalescer.flush();
        assert!(state.back_to_top_visible);
        assert!(!coalescer.is_ticking());

        assert!(coalescer.record(0.0));
        assert_eq!(coalescer.flush(), ScrollState::default());
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target("#contact"), Some("contact"));
    }

    #[test]
    fn anchor_target_accounts_for_header_and_gap() {
        assert_eq!(anchor_scroll_top(400.0, 1_000.0, 72.0), 1_320.0);
    }
}
