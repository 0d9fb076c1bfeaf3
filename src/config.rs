use std::time::Duration;
use crate::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub interval: Duration,    // Auto-play period
    pub swipe_threshold: f32,  // Pixels a touch must travel to count as a swipe
    pub auto_play: bool,       // Start auto-play on construction and resume it after interaction
}

impl CarouselConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: AUTO_PLAY_INTERVAL,
            swipe_threshold: SWIPE_THRESHOLD,
            auto_play: true,
        }
    }
}
