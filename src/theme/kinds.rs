#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::time::Duration;

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::{ThemeExt, ThemeTextStyle};

/// Animation duration tiers that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> Duration)]
pub enum ThemeDurationKind {
    /// Hover feedback and value jumps.
    #[assoc(resolve = cx.get_theme().durations.fast)]
    Fast,
    #[assoc(resolve = cx.get_theme().durations.normal)]
    Normal,
    #[assoc(resolve = cx.get_theme().durations.slow)]
    Slow,
}

/// Text style variants that resolve to theme-defined values.
///
/// `active()` maps a style to its accent-tinted counterpart.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> ThemeTextStyle)]
#[func(pub fn active(&self) -> ThemeTextStyleKind)]
pub enum ThemeTextStyleKind {
    #[assoc(resolve = cx.get_theme().text.normal.clone())]
    #[assoc(active = ThemeTextStyleKind::NormalActive)]
    Normal,
    #[assoc(resolve = cx.get_theme().text.normal_active.clone())]
    #[assoc(active = ThemeTextStyleKind::NormalActive)]
    NormalActive,
    /// Captions and tooltips.
    #[assoc(resolve = cx.get_theme().text.small.clone())]
    #[assoc(active = ThemeTextStyleKind::SmallActive)]
    Small,
    #[assoc(resolve = cx.get_theme().text.small_active.clone())]
    #[assoc(active = ThemeTextStyleKind::SmallActive)]
    SmallActive,
    #[assoc(resolve = cx.get_theme().text.large.clone())]
    #[assoc(active = ThemeTextStyleKind::LargeActive)]
    Large,
    #[assoc(resolve = cx.get_theme().text.large_active.clone())]
    #[assoc(active = ThemeTextStyleKind::LargeActive)]
    LargeActive,
}
