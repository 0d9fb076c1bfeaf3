use raylib::prelude::*;

const MARGIN: f32 = 40.0;
const BUTTON_SIZE: f32 = 56.0;
pub const INDICATOR_RADIUS: f32 = 8.0;
const INDICATOR_SPACING: f32 = 28.0;

/// Screen geometry of the carousel for the current window size.
pub struct Layout {
    pub carousel: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Vector2>,
}

impl Layout {
    pub fn new(screen_width: i32, screen_height: i32, slide_count: usize) -> Self {
        let carousel = Rectangle::new(
            MARGIN,
            MARGIN,
            (screen_width as f32 - 2.0 * MARGIN).max(0.0),
            (screen_height as f32 - 2.0 * MARGIN).max(0.0),
        );

        let button_y = carousel.y + (carousel.height - BUTTON_SIZE) * 0.5;
        let prev = Rectangle::new(carousel.x + 10.0, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let next = Rectangle::new(
            carousel.x + carousel.width - BUTTON_SIZE - 10.0,
            button_y,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );

        // One dot per slide, centered along the bottom edge
        let row_width = slide_count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        let first_x = carousel.x + (carousel.width - row_width) * 0.5;
        let dot_y = carousel.y + carousel.height - 30.0;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * INDICATOR_SPACING, dot_y))
            .collect();

        Self { carousel, prev, next, indicators }
    }

    /// Region slides are drawn into, between the two buttons and above the dots.
    pub fn slide_area(&self) -> Rectangle {
        let inset = BUTTON_SIZE + 20.0;
        Rectangle::new(
            self.carousel.x + inset,
            self.carousel.y + 20.0,
            (self.carousel.width - 2.0 * inset).max(0.0),
            (self.carousel.height - 80.0).max(0.0),
        )
    }

    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        let reach = INDICATOR_RADIUS * 1.5;
        self.indicators.iter().position(|dot| {
            let dx = dot.x - point.x;
            let dy = dot.y - point.y;
            dx * dx + dy * dy <= reach * reach
        })
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}
