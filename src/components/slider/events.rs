use gpui::{MouseDownEvent, MouseExitEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point};

/// The platform event that triggered a slider callback.
#[derive(Debug, Clone)]
pub enum SliderPointerEvent {
    Down(MouseDownEvent),
    Move(MouseMoveEvent),
    Up(MouseUpEvent),
    /// The pointer left the window.
    Exit(MouseExitEvent),
    /// The pointer left the slider's own surface.
    Leave,
}

impl SliderPointerEvent {
    /// Window-relative pointer position, when the event carries one.
    pub fn position(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Down(event) => Some(event.position),
            Self::Move(event) => Some(event.position),
            Self::Up(event) => Some(event.position),
            Self::Exit(event) => Some(event.position),
            Self::Leave => None,
        }
    }

    pub fn is_end_of_gesture(&self) -> bool {
        matches!(self, Self::Up(_) | Self::Exit(_) | Self::Leave)
    }
}
