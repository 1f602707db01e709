use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

/// Opacity of a disabled component.
pub const DISABLED_OPACITY: f32 = 0.5;

/// Fades between full and [`DISABLED_OPACITY`] opacity.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_disabled: bool,
) -> Transition<f32> {
    let opacity = if is_disabled { DISABLED_OPACITY } else { 1. };

    let transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:disabled"),
            cx,
            duration,
            |_window, _cx| opacity,
        )
        .with_easing(ease_out_quint());

    transition.update(cx, |this, cx| {
        if *this != opacity {
            *this = opacity;
            cx.notify();
        }
    });

    transition
}
