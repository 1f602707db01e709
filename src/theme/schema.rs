use std::time::Duration;

use gpui::{FontWeight, Global, Pixels, Rgba, SharedString, px};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    ThemeOverrides, ThemePreset,
    deserializers::{de_duration, de_pixels, de_rgba, de_string_or_non_empty_list},
};

/// An immutable style bundle shared by every widget that reads it.
///
/// Build one from a [`ThemePreset`] (optionally with [`ThemeOverrides`]) or
/// deserialize a complete theme with [`Theme::from_json`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub durations: ThemeDurations,
    pub colors: ThemeColors,
    pub text: ThemeTextStyles,
}

impl Theme {
    pub fn dark() -> Self {
        ThemePreset::Dark.build(None)
    }

    pub fn light() -> Self {
        ThemePreset::Light.build(None)
    }

    pub fn red() -> Self {
        ThemePreset::Red.build(None)
    }

    /// Deserializes a complete theme. Use [`ThemeOverrides::from_json`] for
    /// partial records layered over a preset.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub(crate) fn from_parts(preset: ThemePreset, overrides: &ThemeOverrides) -> Self {
        let (preset_color1, preset_color2) = preset.base_colors();

        let primary = overrides.primary.unwrap_or_else(|| preset.primary_color());
        let color1 = overrides.color1.unwrap_or(preset_color1);
        let color2 = overrides.color2.unwrap_or(preset_color2);
        let stroke_width = overrides.stroke_width.unwrap_or(px(2.));

        let base_text = ThemeTextStyle {
            family: overrides
                .text
                .family
                .clone()
                .unwrap_or_else(ThemeTextStyle::default_family),
            weight: overrides.text.weight.unwrap_or(FontWeight::MEDIUM.0),
            size: overrides.text.size.unwrap_or(px(16.)),
            fill: overrides.text.fill.unwrap_or(color2),
        };

        Self {
            name: overrides
                .name
                .clone()
                .unwrap_or_else(|| preset.name().into()),
            layout: ThemeLayout {
                margin: overrides.margin.unwrap_or(px(10.)),
                padding: overrides.padding.unwrap_or(px(10.)),
                radius: overrides.radius.unwrap_or(px(4.)),
            },
            durations: ThemeDurations {
                fast: overrides.fast.unwrap_or(Duration::from_millis(250)),
                normal: overrides.normal.unwrap_or(Duration::from_millis(500)),
                slow: overrides.slow.unwrap_or(Duration::from_secs(1)),
            },
            colors: ThemeColors {
                primary,
                color1,
                color2,
                fill: overrides.fill.unwrap_or(color1),
                fill_active: overrides.fill_active.unwrap_or(color1),
                stroke: overrides.stroke.unwrap_or(color2),
                stroke_active: overrides.stroke_active.unwrap_or(color2),
                stroke_width,
                stroke_active_width: overrides.stroke_active_width.unwrap_or(stroke_width),
                icon: overrides.icon.unwrap_or(color2),
                icon_active: overrides.icon_active.unwrap_or(primary),
            },
            text: ThemeTextStyles::derive(base_text, primary),
        }
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeLayout {
    #[serde(deserialize_with = "de_pixels")]
    pub margin: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub padding: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub radius: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeDurations {
    #[serde(deserialize_with = "de_duration")]
    pub fast: Duration,
    #[serde(deserialize_with = "de_duration")]
    pub normal: Duration,
    #[serde(deserialize_with = "de_duration")]
    pub slow: Duration,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    /// Accent color.
    #[serde(deserialize_with = "de_rgba")]
    pub primary: Rgba,
    /// Background base color.
    #[serde(deserialize_with = "de_rgba")]
    pub color1: Rgba,
    /// Foreground base color.
    #[serde(deserialize_with = "de_rgba")]
    pub color2: Rgba,
    #[serde(deserialize_with = "de_rgba")]
    pub fill: Rgba,
    #[serde(deserialize_with = "de_rgba")]
    pub fill_active: Rgba,
    #[serde(deserialize_with = "de_rgba")]
    pub stroke: Rgba,
    #[serde(deserialize_with = "de_rgba")]
    pub stroke_active: Rgba,
    #[serde(deserialize_with = "de_pixels")]
    pub stroke_width: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub stroke_active_width: Pixels,
    #[serde(deserialize_with = "de_rgba")]
    pub icon: Rgba,
    #[serde(deserialize_with = "de_rgba")]
    pub icon_active: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextStyle {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    pub weight: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub size: Pixels,
    #[serde(deserialize_with = "de_rgba")]
    pub fill: Rgba,
}

impl ThemeTextStyle {
    pub(crate) fn default_family() -> SmallVec<[SharedString; 1]> {
        SmallVec::from_iter(
            [
                "Avenir Next",
                "Open Sans",
                "Segoe UI",
                "Roboto",
                "Helvetica Neue",
                "Arial",
                "sans-serif",
            ]
            .into_iter()
            .map(SharedString::from),
        )
    }

    pub fn font_weight(&self) -> FontWeight {
        FontWeight(self.weight)
    }

    fn with_size_offset(&self, offset: f32) -> Self {
        Self {
            size: self.size + px(offset),
            ..self.clone()
        }
    }

    fn with_fill(&self, fill: Rgba) -> Self {
        Self {
            fill,
            ..self.clone()
        }
    }
}

/// The six text styles every theme exposes.
///
/// `*_active` variants differ from their base only by `fill`; `small` and
/// `large` differ from `normal` only by `size`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextStyles {
    pub normal: ThemeTextStyle,
    pub normal_active: ThemeTextStyle,
    pub small: ThemeTextStyle,
    pub small_active: ThemeTextStyle,
    pub large: ThemeTextStyle,
    pub large_active: ThemeTextStyle,
}

impl ThemeTextStyles {
    const SIZE_STEP: f32 = 2.;

    pub fn derive(base: ThemeTextStyle, active_fill: Rgba) -> Self {
        let small = base.with_size_offset(-Self::SIZE_STEP);
        let large = base.with_size_offset(Self::SIZE_STEP);

        Self {
            normal_active: base.with_fill(active_fill),
            small_active: small.with_fill(active_fill),
            large_active: large.with_fill(active_fill),
            normal: base,
            small,
            large,
        }
    }
}
