use std::{path::Path, time::Duration};

use gpui::{Pixels, Rgba, SharedString};
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use super::deserializers::{
    de_opt_duration, de_opt_pixels, de_opt_rgba, de_opt_string_or_non_empty_list,
};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme overrides: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read theme overrides from \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A partial theme. Every field that is set replaces the preset's value
/// before derived colors and text styles are computed.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub name: Option<SharedString>,

    #[serde(deserialize_with = "de_opt_pixels")]
    pub margin: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub padding: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub radius: Option<Pixels>,

    #[serde(deserialize_with = "de_opt_duration")]
    pub fast: Option<Duration>,
    #[serde(deserialize_with = "de_opt_duration")]
    pub normal: Option<Duration>,
    #[serde(deserialize_with = "de_opt_duration")]
    pub slow: Option<Duration>,

    #[serde(deserialize_with = "de_opt_rgba")]
    pub primary: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub color1: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub color2: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub fill: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub fill_active: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub stroke: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub stroke_active: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub stroke_width: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub stroke_active_width: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub icon: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub icon_active: Option<Rgba>,

    /// Overrides for the base text style. The other five styles are derived
    /// from it.
    pub text: ThemeTextOverrides,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeTextOverrides {
    #[serde(deserialize_with = "de_opt_string_or_non_empty_list")]
    pub family: Option<SmallVec<[SharedString; 1]>>,
    pub weight: Option<f32>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub size: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_rgba")]
    pub fill: Option<Rgba>,
}

impl ThemeOverrides {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(contents)
    }
}
