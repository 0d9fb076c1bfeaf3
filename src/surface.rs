use raylib::prelude::*;
use testimonial_carousel::SlideView;
use crate::layout::{Layout, INDICATOR_RADIUS};
use crate::slide::{Slide, ACCENT};

const PANEL: Color = Color::new(0, 102, 179, 255);

/// raylib-backed rendering surface: owns the slides and draws the active
/// one plus the controls.
pub struct Surface {
    slides: Vec<Slide>,
    animate: bool,
}

impl Surface {
    pub fn new(slides: Vec<Slide>, reduced_motion: bool) -> Self {
        Self { slides, animate: !reduced_motion }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        d.draw_rectangle_rec(layout.carousel, PANEL);

        if self.slides.is_empty() {
            let area = layout.slide_area();
            d.draw_text("No testimonials yet.", area.x as i32, (area.y + area.height * 0.5) as i32, 30, Color::RAYWHITE);
            return;
        }

        // Fading-out slides are drawn first so the incoming one ends up on top
        let area = layout.slide_area();
        for slide in self.slides.iter().filter(|s| !s.active && s.opacity() > 0.0) {
            slide.draw(d, area);
        }
        for slide in self.slides.iter().filter(|s| s.active) {
            slide.draw(d, area);
        }

        for (rect, label) in [(layout.prev, "<"), (layout.next, ">")] {
            d.draw_rectangle_lines_ex(rect, 2.0, Color::RAYWHITE);
            d.draw_text(label, (rect.x + rect.width * 0.5 - 8.0) as i32, (rect.y + 10.0) as i32, 36, Color::RAYWHITE);
        }

        for (dot, slide) in layout.indicators.iter().zip(self.slides.iter()) {
            if slide.active {
                d.draw_circle_v(*dot, INDICATOR_RADIUS, ACCENT);
            } else {
                d.draw_circle_lines(dot.x as i32, dot.y as i32, INDICATOR_RADIUS, Color::RAYWHITE);
            }
        }
    }
}

impl SlideView for Surface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.set_active(active, self.animate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testimonial_carousel::{Carousel, CarouselConfig, CarouselEvent, FrameTimer};

    fn quotes(n: usize) -> Vec<Slide> {
        (0..n).map(|i| Slide::quote(&format!("quote {}", i), "guest")).collect()
    }

    #[test]
    fn carousel_drives_slide_flags() {
        let surface = Surface::new(quotes(3), true);
        let mut carousel = Carousel::new(surface, FrameTimer::new(), CarouselConfig::default());
        carousel.dispatch(CarouselEvent::Indicator(2));

        let active: Vec<bool> = carousel.view().slides.iter().map(|s| s.active).collect();
        assert_eq!(active, vec![false, false, true]);
        assert_eq!(carousel.view().slides[2].opacity(), 1.0);
        assert_eq!(carousel.view().slides[0].opacity(), 0.0);
    }

    #[test]
    fn crossfade_runs_on_update() {
        let surface = Surface::new(quotes(2), false);
        let mut carousel = Carousel::new(surface, FrameTimer::new(), CarouselConfig::default());
        carousel.dispatch(CarouselEvent::Next);
        assert!(carousel.view().slides[1].is_animating);

        carousel.view_mut().update(10.0);
        assert_eq!(carousel.view().slides[1].opacity(), 1.0);
        assert_eq!(carousel.view().slides[0].opacity(), 0.0);
    }
}
