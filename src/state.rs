#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideshowState {
    Idle,           // Not started yet, no slide is active
    Empty,          // No slides to show, nothing is ever active
    Showing(usize), // Slide at this index is the active one
}

impl SlideshowState {
    pub fn active_index(self) -> Option<usize> {
        match self {
            SlideshowState::Showing(index) => Some(index),
            SlideshowState::Idle | SlideshowState::Empty => None,
        }
    }
}
