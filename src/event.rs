#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Left,
    Right,
}

/// Logical inputs the carousel reacts to. Mapping raw device events to
/// these is the host's job.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselEvent {
    Next,                  // "next" control clicked
    Prev,                  // "previous" control clicked
    Indicator(usize),      // indicator i clicked
    Key(Direction),        // arrow key pressed
    PointerEnter,
    PointerLeave,
    TouchStart(f32),       // horizontal position where the touch began
    TouchEnd(f32),         // horizontal position where the touch ended
    ViewportChanged(bool), // carousel scrolled into (true) or out of view
}
