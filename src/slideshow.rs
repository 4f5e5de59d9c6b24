//! Timed rotation through a fixed set of slides.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};

use crate::constants::SLIDE_INTERVAL_MS;
use crate::schedule::Scheduler;
use crate::state::SlideshowState;

/// The ordered slides a controller toggles.
pub trait SlideTarget {
    fn slide_count(&self) -> usize;
    fn set_active(&mut self, index: usize, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowConfig {
    pub interval: Duration,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(SLIDE_INTERVAL_MS),
        }
    }
}

pub struct SlideshowController<T> {
    slides: T,             // Slides toggled on every show
    count: usize,          // Fixed when the controller is built
    current: usize,        // Index of the slide shown last (or next, before start)
    state: SlideshowState,
}

impl<T: SlideTarget> SlideshowController<T> {
    /// Takes ownership of the slides; their count is fixed from here on.
    pub fn new(slides: T) -> Self {
        let count = slides.slide_count();
        Self {
            slides,
            count,
            current: 0,
            state: SlideshowState::Idle,
        }
    }

    pub fn slides(&self) -> &T {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    /// Shows the first slide.
    pub fn start(&mut self) {
        self.show(self.current);
    }

    /// Moves to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        if self.count == 0 {
            self.state = SlideshowState::Empty;
            return;
        }
        self.current = (self.current + 1) % self.count;
        self.show(self.current);
    }

    /// Marks `index` active and every other slide inactive.
    pub fn show(&mut self, index: usize) {
        if self.count == 0 {
            self.state = SlideshowState::Empty;
            return;
        }
        let index = index % self.count;
        // Full pass: the chosen slide gains "active", every other one loses it
        for i in 0..self.count {
            self.slides.set_active(i, i == index);
        }
        self.current = index;
        self.state = SlideshowState::Showing(index);
        debug!("slide {} of {} active", index + 1, self.count);
    }
}

/// Shows the first slide and arms the repeating advance.
///
/// The controller is shared with the tick closure; the returned handle is the
/// only way to reach the armed task.
pub fn run<T, S>(
    controller: Rc<RefCell<SlideshowController<T>>>,
    scheduler: &mut S,
    config: SlideshowConfig,
) -> S::Handle
where
    T: SlideTarget + 'static,
    S: Scheduler,
{
    controller.borrow_mut().start();
    info!(
        "slideshow started with {} slides, advancing every {:?}",
        controller.borrow().count,
        config.interval
    );
    scheduler.every(
        config.interval,
        Box::new(move || controller.borrow_mut().advance()),
    )
}

/// Active flags kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideFlags {
    pub active: Vec<bool>,
}

impl SlideFlags {
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|active| **active).count()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|active| *active)
    }
}

impl SlideTarget for SlideFlags {
    fn slide_count(&self) -> usize {
        self.active.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active.get_mut(index) {
            *flag = active;
        }
    }
}
