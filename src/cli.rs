use std::path::PathBuf;
use std::time::Duration;
use anyhow::{ensure, Result};
use clap::Parser;
use testimonial_carousel::constants::*;
use testimonial_carousel::CarouselConfig;

/// Testimonial carousel player
#[derive(Parser, Debug)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory of images to rotate instead of the built-in testimonials
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Auto-play period in milliseconds
    #[arg(long, default_value_t = AUTO_PLAY_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Only change slides on user input
    #[arg(long)]
    pub no_auto_play: bool,

    /// Disable auto-play and slide transitions
    #[arg(long)]
    pub reduced_motion: bool,

    /// Shuffle the slide order once at startup
    #[arg(long)]
    pub shuffle: bool,
}

impl Args {
    pub fn carousel_config(&self) -> Result<CarouselConfig> {
        ensure!(self.interval_ms > 0, "--interval-ms must be greater than zero");
        ensure!(
            self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0,
            "--swipe-threshold must be a non-negative number"
        );

        Ok(CarouselConfig::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_swipe_threshold(self.swipe_threshold)
            .with_auto_play(!self.no_auto_play && !self.reduced_motion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::try_parse_from(["carousel"]).unwrap();
        assert_eq!(args.carousel_config().unwrap(), CarouselConfig::default());
    }

    #[test]
    fn reduced_motion_turns_off_auto_play() {
        let args = Args::try_parse_from(["carousel", "--reduced-motion"]).unwrap();
        assert!(!args.carousel_config().unwrap().auto_play);
    }

    #[test]
    fn flags_are_applied() {
        let args = Args::try_parse_from([
            "carousel",
            "--interval-ms",
            "1500",
            "--swipe-threshold",
            "20",
            "--images",
            "photos",
            "--shuffle",
        ])
        .unwrap();
        let config = args.carousel_config().unwrap();
        assert_eq!(config.interval, Duration::from_millis(1500));
        assert_eq!(config.swipe_threshold, 20.0);
        assert!(config.auto_play);
        assert_eq!(args.images, Some(PathBuf::from("photos")));
        assert!(args.shuffle);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let args = Args::try_parse_from(["carousel", "--interval-ms", "0"]).unwrap();
        assert!(args.carousel_config().is_err());
    }
}
