use gpui::{App, Window};

/// What a slider does with a mouse-down it has handled.
///
/// Handled presses stop propagation and prevent the window default unless
/// the matching flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseBehavior {
    /// Let parents see the press too.
    pub allow_propagation: bool,
    /// Keep the window's default handling, such as focus changes.
    pub allow_default: bool,
}

impl MouseBehavior {
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// Builder methods for anything carrying a [`MouseBehavior`].
pub trait MouseBehaviorExt: Sized {
    fn mouse_behavior_mut(&mut self) -> &mut MouseBehavior;

    fn allow_mouse_propagation(mut self) -> Self {
        self.mouse_behavior_mut().allow_propagation = true;
        self
    }

    fn allow_default_mouse_behavior(mut self) -> Self {
        self.mouse_behavior_mut().allow_default = true;
        self
    }
}
