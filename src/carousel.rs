//! Testimonial carousel: a cyclic index plus the auto-advance timer slot.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Select(usize),
}

/// Index into a fixed, non-empty slide sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselIndex {
    index: usize,
    len: usize,
}

impl CarouselIndex {
    /// `None` for an empty slide set; the carousel is then disabled.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn current(self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        self.show(self.index as isize + 1)
    }

    pub fn select(self, target: usize) -> Self {
        self.show(target as isize)
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Select(target) => self.select(target),
        }
    }

    fn show(self, target: isize) -> Self {
        let index = target.rem_euclid(self.len as isize) as usize;
        Self { index, ..self }
    }
}

/// Holds at most one running auto-advance timer.
///
/// `H` is a handle that cancels its timer when dropped, so replacing or
/// clearing the slot stops the previous timer before a new one runs.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn stop(&mut self) {
        self.handle = None;
    }

    /// Stops the running timer, then installs whatever `start` produced.
    pub fn restart(&mut self, start: impl FnOnce() -> Option<H>) {
        self.stop();
        self.handle = start();
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTimer {
        active: Rc<Cell<usize>>,
    }

    impl FakeTimer {
        fn start(active: &Rc<Cell<usize>>) -> Self {
            active.set(active.get() + 1);
            Self {
                active: Rc::clone(active),
            }
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.active.set(self.active.get() - 1);
        }
    }

    #[test]
    fn empty_slide_set_is_disabled() {
        assert!(CarouselIndex::new(0).is_none());
    }

    #[test]
    fn next_cycles_through_every_slide() {
        for len in 1..=6 {
            let start = CarouselIndex::new(len).expect("non-empty");
            let mut carousel = start;
            for step in 1..=(len * 3) {
                carousel = carousel.next();
                assert_eq!(carousel.current(), step % len);
            }
            assert_eq!(carousel, start);
        }
    }

    #[test]
    fn advancing_n_times_returns_to_any_start() {
        let len = 4;
        for start in 0..len {
            let mut carousel = CarouselIndex::new(len).expect("non-empty").select(start);
            for _ in 0..len {
                carousel = carousel.next();
            }
            assert_eq!(carousel.current(), start);
        }
    }

    #[test]
    fn selecting_a_dot_shows_that_slide() {
        let carousel = CarouselIndex::new(5).expect("non-empty").next().next();
        for k in 0..5 {
            assert_eq!(carousel.apply(CarouselAction::Select(k)).current(), k);
        }
        assert_eq!(carousel.select(7).current(), 2);
    }

    #[test]
    fn restarting_keeps_a_single_active_timer() {
        let active = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        slot.restart(|| Some(FakeTimer::start(&active)));
        assert_eq!(active.get(), 1);

        // dot click
        slot.restart(|| Some(FakeTimer::start(&active)));
        assert_eq!(active.get(), 1);

        // hover then leave
        slot.stop();
        assert_eq!(active.get(), 0);
        assert!(!slot.is_running());
        slot.restart(|| Some(FakeTimer::start(&active)));
        slot.restart(|| Some(FakeTimer::start(&active)));
        assert_eq!(active.get(), 1);

        drop(slot);
        assert_eq!(active.get(), 0);
    }
}
