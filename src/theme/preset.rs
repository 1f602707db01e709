#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::Rgba;
use serde::{Deserialize, Serialize};

use crate::{
    theme::{Theme, ThemeOverrides},
    utils::rgb_a,
};

const PRIMARY: u32 = 0x5EC7F8;
const PRIMARY_RED: u32 = 0xD92F31;
const DARK: u32 = 0x282828;
const LIGHT: u32 = 0xF6F6F6;

/// The built-in themes. Presets only differ in their initial colors.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub fn primary_color(&self) -> Rgba)]
#[func(pub fn base_colors(&self) -> (Rgba, Rgba))]
pub enum ThemePreset {
    #[default]
    #[assoc(name = "dark")]
    #[assoc(primary_color = rgb_a(PRIMARY, 1.))]
    #[assoc(base_colors = (rgb_a(DARK, 1.), rgb_a(LIGHT, 1.)))]
    Dark,
    /// Dark with the two base colors swapped.
    #[assoc(name = "light")]
    #[assoc(primary_color = rgb_a(PRIMARY, 1.))]
    #[assoc(base_colors = (rgb_a(LIGHT, 1.), rgb_a(DARK, 1.)))]
    Light,
    /// Dark with a red accent.
    #[assoc(name = "red")]
    #[assoc(primary_color = rgb_a(PRIMARY_RED, 1.))]
    #[assoc(base_colors = (rgb_a(DARK, 1.), rgb_a(LIGHT, 1.)))]
    Red,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [Self::Dark, Self::Light, Self::Red];

    /// Looks a preset up by name. Unknown names fall back to [`ThemePreset::Dark`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(theme = name, "unknown theme name, using dark");
                Self::Dark
            })
    }

    pub fn build(self, overrides: Option<&ThemeOverrides>) -> Theme {
        match overrides {
            Some(overrides) => Theme::from_parts(self, overrides),
            None => Theme::from_parts(self, &ThemeOverrides::default()),
        }
    }
}

/// Anything a theme can be resolved from.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeSource {
    Name(String),
    Preset(ThemePreset),
    Theme(Theme),
}

impl Default for ThemeSource {
    fn default() -> Self {
        Self::Preset(ThemePreset::Dark)
    }
}

impl From<&str> for ThemeSource {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ThemeSource {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Option<&str>> for ThemeSource {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from).unwrap_or_default()
    }
}

impl From<ThemePreset> for ThemeSource {
    fn from(preset: ThemePreset) -> Self {
        Self::Preset(preset)
    }
}

impl From<Theme> for ThemeSource {
    fn from(theme: Theme) -> Self {
        Self::Theme(theme)
    }
}

/// Resolves a theme name, preset or finished theme into a [`Theme`].
///
/// Finished themes are returned unchanged and ignore `overrides`.
pub fn resolve_theme(source: impl Into<ThemeSource>, overrides: Option<&ThemeOverrides>) -> Theme {
    match source.into() {
        ThemeSource::Theme(theme) => theme,
        ThemeSource::Preset(preset) => preset.build(overrides),
        ThemeSource::Name(name) => ThemePreset::from_name(&name).build(overrides),
    }
}
