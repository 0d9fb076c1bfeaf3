use std::time::Duration;
use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use testimonial_carousel::constants::*;
use testimonial_carousel::{Carousel, FrameTimer};

mod cli;
mod input;
mod layout;
mod slide;
mod surface;
mod testimonials;
mod texture_loader;

use crate::cli::Args;
use crate::input::{InputMapper, RawInput};
use crate::layout::Layout;
use crate::slide::{Content, Slide};
use crate::surface::Surface;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const BACKGROUND: Color = Color::new(18, 24, 38, 255);

fn load_image_slides(rl: &mut RaylibHandle, thread: &RaylibThread, args: &Args) -> Result<Vec<Slide>> {
    let Some(dir) = &args.images else {
        return Ok(Vec::new());
    };

    let mut slides = Vec::new();
    for path in load_sorted_image_paths(dir)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => slides.push(Slide::new(Content::Image(texture))),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    if slides.is_empty() {
        bail!("None of the images in {} could be loaded", dir.display());
    }
    info!("Loaded {} image slides from {}", slides.len(), dir.display());
    Ok(slides)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.carousel_config()?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Testimonials")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = match load_image_slides(&mut rl, &thread, &args) {
        Ok(slides) if !slides.is_empty() => slides,
        Ok(_) => testimonials::builtin_slides(),
        Err(e) => {
            warn!("{:#}, falling back to the built-in testimonials", e);
            testimonials::builtin_slides()
        }
    };
    if args.shuffle {
        slides.shuffle(&mut rand::rng());
    }

    let surface = Surface::new(slides, args.reduced_motion);
    let mut carousel = Carousel::new(surface, FrameTimer::new(), config);
    let mut input = InputMapper::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().max(0.0);
        let layout = Layout::new(rl.get_screen_width(), rl.get_screen_height(), carousel.slide_count());

        // Input first, so a click always beats an auto-advance due this frame
        let raw = RawInput::read(&rl);
        for event in input.map(&raw, &layout) {
            carousel.dispatch(event);
        }
        carousel.update(Duration::from_secs_f32(dt));
        carousel.view_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        carousel.view().draw(&mut d, &layout);
    }

    Ok(())
}
