use std::time::Duration;

pub const AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const SWIPE_THRESHOLD: f32 = 50.0;                                // Minimum horizontal travel for a swipe (pixels)

pub const RENDER_WIDTH: i32 = 1280;           // Width of the demo window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const ANIMATION_DURATION: f32 = 0.5;      // Crossfade duration between slides (seconds)
