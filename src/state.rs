use crate::timer::TimerId;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoPlay {
    Stopped,          // No timer scheduled
    Running(TimerId), // Timer scheduled, ticks advance the carousel
}

impl AutoPlay {
    pub fn is_running(&self) -> bool {
        matches!(self, AutoPlay::Running(_))
    }
}

/// Mutable state of one carousel instance.
#[derive(Debug, Clone)]
pub struct CarouselState {
    pub current_index: usize,
    pub auto_play: AutoPlay,

    pub pointer_over: bool,
    pub in_viewport: bool,
    pub touch_start_x: Option<f32>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            auto_play: AutoPlay::Stopped,
            pointer_over: false,
            in_viewport: true,
            touch_start_x: None,
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}
