use raylib::prelude::*;
use testimonial_carousel::{CarouselEvent, Direction};
use crate::layout::{contains, Layout};

/// Raw device state sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub struct RawInput {
    pub mouse: Vector2,
    pub pressed: bool,
    pub released: bool,
    pub key_left: bool,
    pub key_right: bool,
    pub minimized: bool,
}

impl RawInput {
    pub fn read(rl: &RaylibHandle) -> Self {
        Self {
            mouse: rl.get_mouse_position(),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            key_left: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            key_right: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
            minimized: rl.is_window_minimized(),
        }
    }
}

/// Turns per-frame device state into logical carousel events. Remembers
/// just enough to report transitions (enter/leave, visibility, drags).
pub struct InputMapper {
    pointer_inside: bool,
    dragging: bool,
    visible: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self { pointer_inside: false, dragging: false, visible: true }
    }

    pub fn map(&mut self, raw: &RawInput, layout: &Layout) -> Vec<CarouselEvent> {
        let mut events = Vec::new();

        let visible = !raw.minimized;
        if visible != self.visible {
            self.visible = visible;
            events.push(CarouselEvent::ViewportChanged(visible));
        }

        let inside = contains(&layout.carousel, raw.mouse);
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            events.push(if inside { CarouselEvent::PointerEnter } else { CarouselEvent::PointerLeave });
        }

        if raw.key_left {
            events.push(CarouselEvent::Key(Direction::Left));
        }
        if raw.key_right {
            events.push(CarouselEvent::Key(Direction::Right));
        }

        if raw.pressed && inside {
            if contains(&layout.prev, raw.mouse) {
                events.push(CarouselEvent::Prev);
            } else if contains(&layout.next, raw.mouse) {
                events.push(CarouselEvent::Next);
            } else if let Some(index) = layout.indicator_at(raw.mouse) {
                events.push(CarouselEvent::Indicator(index));
            } else {
                // Anywhere else on the carousel starts a drag, the mouse stand-in for touch
                self.dragging = true;
                events.push(CarouselEvent::TouchStart(raw.mouse.x));
            }
        }

        if raw.released && self.dragging {
            self.dragging = false;
            events.push(CarouselEvent::TouchEnd(raw.mouse.x));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle(x: f32, y: f32) -> RawInput {
        RawInput {
            mouse: Vector2::new(x, y),
            pressed: false,
            released: false,
            key_left: false,
            key_right: false,
            minimized: false,
        }
    }

    fn center(r: &Rectangle) -> (f32, f32) {
        (r.x + r.width * 0.5, r.y + r.height * 0.5)
    }

    #[test]
    fn reports_pointer_enter_and_leave_once() {
        let layout = Layout::new(1280, 720, 3);
        let mut mapper = InputMapper::new();

        assert_eq!(mapper.map(&idle(640.0, 360.0), &layout), vec![CarouselEvent::PointerEnter]);
        assert!(mapper.map(&idle(650.0, 360.0), &layout).is_empty());
        assert_eq!(mapper.map(&idle(2.0, 2.0), &layout), vec![CarouselEvent::PointerLeave]);
    }

    #[test]
    fn clicks_on_controls_become_navigation() {
        let layout = Layout::new(1280, 720, 3);
        let mut mapper = InputMapper::new();
        mapper.map(&idle(640.0, 360.0), &layout);

        let (x, y) = center(&layout.next);
        let click = RawInput { pressed: true, ..idle(x, y) };
        assert_eq!(mapper.map(&click, &layout), vec![CarouselEvent::Next]);

        let (x, y) = center(&layout.prev);
        let click = RawInput { pressed: true, ..idle(x, y) };
        assert_eq!(mapper.map(&click, &layout), vec![CarouselEvent::Prev]);

        let dot = layout.indicators[2];
        let click = RawInput { pressed: true, ..idle(dot.x, dot.y) };
        assert_eq!(mapper.map(&click, &layout), vec![CarouselEvent::Indicator(2)]);
    }

    #[test]
    fn drag_becomes_touch_pair() {
        let layout = Layout::new(1280, 720, 3);
        let mut mapper = InputMapper::new();
        mapper.map(&idle(700.0, 300.0), &layout);

        let press = RawInput { pressed: true, ..idle(700.0, 300.0) };
        assert_eq!(mapper.map(&press, &layout), vec![CarouselEvent::TouchStart(700.0)]);

        // releasing outside the carousel still ends the drag
        let release = RawInput { released: true, ..idle(10.0, 300.0) };
        assert_eq!(
            mapper.map(&release, &layout),
            vec![CarouselEvent::PointerLeave, CarouselEvent::TouchEnd(10.0)]
        );

        // a release without a drag is nothing
        let release = RawInput { released: true, ..idle(10.0, 300.0) };
        assert!(mapper.map(&release, &layout).is_empty());
    }

    #[test]
    fn keys_and_minimize() {
        let layout = Layout::new(1280, 720, 3);
        let mut mapper = InputMapper::new();

        let raw = RawInput { key_left: true, minimized: true, ..idle(2.0, 2.0) };
        assert_eq!(
            mapper.map(&raw, &layout),
            vec![CarouselEvent::ViewportChanged(false), CarouselEvent::Key(Direction::Left)]
        );

        let raw = RawInput { key_right: true, ..idle(2.0, 2.0) };
        assert_eq!(
            mapper.map(&raw, &layout),
            vec![CarouselEvent::ViewportChanged(true), CarouselEvent::Key(Direction::Right)]
        );
    }
}
