use raylib::prelude::*;
use testimonial_carousel::constants::*;

pub enum Content {
    Quote { text: String, author: String },
    Image(Texture2D),
}

pub struct Slide {
    content: Content,

    pub active: bool,

    opacity: f32,
    start_opacity: f32,
    end_opacity: f32,

    animation_timer: f32,
    pub is_animating: bool,
}

impl Slide {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            active: false,
            opacity: 0.0,
            start_opacity: 0.0,
            end_opacity: 0.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn quote(text: &str, author: &str) -> Self {
        Self::new(Content::Quote { text: text.to_string(), author: author.to_string() })
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Fades towards the new state, or jumps straight to it when `animate`
    /// is false (reduced motion).
    pub fn set_active(&mut self, active: bool, animate: bool) {
        self.active = active;
        self.end_opacity = if active { 1.0 } else { 0.0 };

        if !animate {
            self.opacity = self.end_opacity;
            self.is_animating = false;
            return;
        }
        if self.opacity == self.end_opacity {
            self.is_animating = false;
        } else {
            self.start_opacity = self.opacity;
            self.animation_timer = 0.0;
            self.is_animating = true;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / ANIMATION_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.opacity = raylib::core::math::lerp(self.start_opacity, self.end_opacity, t);

        if self.animation_timer >= ANIMATION_DURATION {
            self.is_animating = false;
            self.opacity = self.end_opacity;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        match &self.content {
            Content::Quote { text, author } => {
                let font_size = 30;
                let line_height = font_size + 10;
                let lines = wrap(text, QUOTE_LINE_CHARS);
                let block_height = (lines.len() as i32 + 2) * line_height;

                let x = (area.x + area.width * 0.1) as i32;
                let mut y = (area.y + (area.height - block_height as f32) * 0.5) as i32;

                for line in lines.iter() {
                    d.draw_text(line, x, y, font_size, Color::RAYWHITE.fade(self.opacity));
                    y += line_height;
                }
                y += line_height;
                d.draw_text(&format!("- {}", author), x, y, font_size - 6, ACCENT.fade(self.opacity));
            }
            Content::Image(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;

                // Fit inside the area, keeping the aspect ratio
                let scale = (area.width * 0.9 / tex_width).min(area.height * 0.9 / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                let dest = Rectangle::new(
                    area.x + (area.width - scaled_width) * 0.5,
                    area.y + (area.height - scaled_height) * 0.5,
                    scaled_width,
                    scaled_height,
                );

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    dest,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE.fade(self.opacity),
                );
            }
        }
    }
}

const QUOTE_LINE_CHARS: usize = 48;
pub const ACCENT: Color = Color::new(127, 181, 57, 255);

// Greedy word wrap on character count
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
