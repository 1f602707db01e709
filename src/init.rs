use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt};

/// Installs the dark theme unless a theme was already set.
pub fn init(cx: &mut App) {
    if cx.try_global::<Theme>().is_none() {
        tracing::debug!("no theme set, using dark");
        cx.set_theme(Theme::dark());
    }
}

/// Sizes `rem` from the theme's normal text size.
pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.theme_or_default().text.normal.size);
}
