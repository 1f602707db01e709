use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    ///
    /// Panics if no theme was set. Call [`crate::init`] first.
    fn get_theme(&self) -> &Theme;

    /// Gets a copy of the theme, or the dark preset if none was set.
    fn theme_or_default(&self) -> Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn theme_or_default(&self) -> Theme {
        self.try_global::<Theme>().cloned().unwrap_or_default()
    }
}
