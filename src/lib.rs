//! Testimonial carousel controller.
//!
//! The controller owns the active-slide index and the auto-play timer; the
//! rendering surface and the timer facility are supplied by the host through
//! the [`SlideView`] and [`Timer`] traits.

pub mod config;
pub mod constants;
pub mod controller;
pub mod event;
pub mod state;
pub mod timer;
pub mod view;

pub use config::CarouselConfig;
pub use controller::Carousel;
pub use event::{CarouselEvent, Direction};
pub use state::{AutoPlay, CarouselState};
pub use timer::{FrameTimer, Timer, TimerId};
pub use view::{FlagView, SlideView};
