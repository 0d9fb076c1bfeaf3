use std::time::Duration;
use log::{debug, info, warn};
use crate::config::CarouselConfig;
use crate::event::{CarouselEvent, Direction};
use crate::state::{AutoPlay, CarouselState};
use crate::timer::{FrameTimer, Timer, TimerId};
use crate::view::SlideView;

/// Carousel controller: keeps exactly one slide active and rotates through
/// them on a timer that any manual navigation restarts.
///
/// A view with zero slides yields an inert controller: every operation is
/// a no-op and no timer is ever scheduled.
pub struct Carousel<V: SlideView, T: Timer> {
    view: V,
    timer: T,
    config: CarouselConfig,
    slide_count: usize,
    state: CarouselState,
}

impl<V: SlideView, T: Timer> Carousel<V, T> {
    pub fn new(view: V, timer: T, config: CarouselConfig) -> Self {
        let slide_count = view.slide_count();
        let mut carousel = Self {
            view,
            timer,
            config,
            slide_count,
            state: CarouselState::new(),
        };

        if slide_count == 0 {
            info!("No slides found, carousel disabled");
            return carousel;
        }

        info!("Carousel initialized with {} slides", slide_count);
        carousel.show(0);
        if carousel.config.auto_play {
            carousel.start_auto_play();
        }
        carousel
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the active slide, `None` for an empty carousel.
    pub fn current_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.state.current_index)
        }
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.auto_play.is_running()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Makes `index` the only active slide. Callers do the wrapping; an
    /// index outside `[0, N)` is ignored.
    pub fn show(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        if index >= self.slide_count {
            warn!("Ignoring slide index {} (carousel has {} slides)", index, self.slide_count);
            return;
        }

        for i in 0..self.slide_count {
            self.view.set_active(i, i == index);
        }
        self.state.current_index = index;
        debug!("Showing slide {}", index);
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        let index = (self.state.current_index + 1) % self.slide_count;
        self.show(index);
    }

    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        let index = (self.state.current_index + self.slide_count - 1) % self.slide_count;
        self.show(index);
    }

    /// Schedules the repeating advance. Does nothing if a timer is already
    /// running, so there is never more than one.
    pub fn start_auto_play(&mut self) {
        if self.is_empty() || self.state.auto_play.is_running() {
            return;
        }
        let id = self.timer.schedule_repeating(self.config.interval);
        self.state.auto_play = AutoPlay::Running(id);
        debug!("Auto-play started ({:?}, timer {})", self.config.interval, id.raw());
    }

    pub fn stop_auto_play(&mut self) {
        if let AutoPlay::Running(id) = self.state.auto_play {
            self.timer.cancel(id);
            self.state.auto_play = AutoPlay::Stopped;
            debug!("Auto-play stopped (timer {})", id.raw());
        }
    }

    pub fn reset_auto_play(&mut self) {
        self.stop_auto_play();
        self.start_auto_play();
    }

    /// Delivers one tick of timer `id`. Ticks from a timer that is no longer
    /// the running one are dropped.
    pub fn on_tick(&mut self, id: TimerId) {
        match self.state.auto_play {
            AutoPlay::Running(running) if running == id => self.next(),
            _ => debug!("Dropping stale tick from timer {}", id.raw()),
        }
    }

    /// Treats a touch that moved from `start_x` to `end_x` as a swipe if it
    /// travelled further than the threshold: leftward goes forward,
    /// rightward goes back.
    pub fn handle_swipe(&mut self, start_x: f32, end_x: f32) {
        if self.is_empty() {
            return;
        }
        let diff = start_x - end_x;
        if diff.abs() > self.config.swipe_threshold {
            if diff > 0.0 {
                self.next();
            } else {
                self.prev();
            }
            self.restart_auto_play();
        } else {
            debug!("Touch moved {:.1}px, below swipe threshold", diff.abs());
        }
    }

    pub fn dispatch(&mut self, event: CarouselEvent) {
        if self.is_empty() {
            return;
        }

        match event {
            CarouselEvent::Next => {
                self.next();
                self.restart_auto_play();
            }
            CarouselEvent::Prev => {
                self.prev();
                self.restart_auto_play();
            }
            CarouselEvent::Indicator(index) => {
                if index < self.slide_count {
                    self.show(index);
                    self.restart_auto_play();
                } else {
                    warn!("Indicator {} clicked but carousel has {} slides", index, self.slide_count);
                }
            }
            CarouselEvent::Key(direction) => {
                if !self.state.in_viewport {
                    debug!("Ignoring {:?} key, carousel is off screen", direction);
                    return;
                }
                match direction {
                    Direction::Left => self.prev(),
                    Direction::Right => self.next(),
                }
                self.restart_auto_play();
            }
            CarouselEvent::PointerEnter => {
                self.state.pointer_over = true;
                self.stop_auto_play();
            }
            CarouselEvent::PointerLeave => {
                self.state.pointer_over = false;
                if self.config.auto_play {
                    self.start_auto_play();
                }
            }
            CarouselEvent::TouchStart(x) => {
                self.state.touch_start_x = Some(x);
            }
            CarouselEvent::TouchEnd(x) => {
                if let Some(start_x) = self.state.touch_start_x.take() {
                    self.handle_swipe(start_x, x);
                }
            }
            CarouselEvent::ViewportChanged(visible) => {
                self.state.in_viewport = visible;
            }
        }
    }

    // Auto-play resumes after manual navigation only when it is configured
    // and the pointer is not resting on the carousel.
    fn restart_auto_play(&mut self) {
        if self.config.auto_play && !self.state.pointer_over {
            self.reset_auto_play();
        }
    }
}

impl<V: SlideView> Carousel<V, FrameTimer> {
    /// Advances the frame timer by `dt` and applies any ticks that fired.
    pub fn update(&mut self, dt: Duration) {
        for id in self.timer.advance(dt) {
            self.on_tick(id);
        }
    }
}

impl<V: SlideView, T: Timer> Drop for Carousel<V, T> {
    fn drop(&mut self) {
        self.stop_auto_play();
    }
}
