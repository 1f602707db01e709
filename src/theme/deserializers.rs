use std::time::Duration;

use gpui::{Pixels, Rgba, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::utils::{parse_hex_color, rgb_a};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Int(u32),
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_opt_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<Option<SmallVec<[SharedString; 1]>>, D::Error>
where
    D: Deserializer<'de>,
{
    de_string_or_non_empty_list(deserializer).map(Some)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels as f32)),
    }
}

pub fn de_opt_pixels<'de, D>(deserializer: D) -> Result<Option<Pixels>, D::Error>
where
    D: Deserializer<'de>,
{
    de_pixels(deserializer).map(Some)
}

/// Accepts seconds as a number, or a string ending in `ms` or `s`.
pub fn de_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let duration = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(secs) => secs_to_duration(secs),

        StringOrFloat::String(string) => {
            let string = string.trim();

            if let Some(millis) = string.strip_suffix("ms") {
                let millis = millis.trim();

                match millis.parse::<u64>() {
                    Ok(millis) => Some(Duration::from_millis(millis)),
                    Err(_) => millis
                        .parse::<f64>()
                        .ok()
                        .and_then(|millis| secs_to_duration(millis / 1000.)),
                }
            } else if let Some(secs) = string.strip_suffix('s') {
                secs.trim().parse::<f64>().ok().and_then(secs_to_duration)
            } else {
                None
            }
        }
    };

    duration.ok_or_else(|| {
        D::Error::custom("expected non-negative seconds or a string ending with 'ms' or 's'")
    })
}

pub fn de_opt_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    de_duration(deserializer).map(Some)
}

fn secs_to_duration(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0. {
        return None;
    }

    if secs.fract() == 0. {
        Some(Duration::from_secs(secs as u64))
    } else {
        Some(Duration::from_secs_f64(secs))
    }
}

/// Accepts `"#rrggbb"`, `"#rrggbbaa"` or an integer `0xRRGGBB`.
pub fn de_rgba<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(hex) if hex <= 0xFFFFFF => Ok(rgb_a(hex, 1.)),
        StringOrInt::Int(_) => Err(D::Error::custom("color integer must be at most 0xFFFFFF")),
        StringOrInt::String(string) => parse_hex_color(&string).ok_or_else(|| {
            D::Error::custom("expected a color in the form '#rrggbb' or '#rrggbbaa'")
        }),
    }
}

pub fn de_opt_rgba<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    de_rgba(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::de::IntoDeserializer;
    use serde::de::value::Error as ValueError;

    use super::*;

    fn duration(input: &str) -> Result<Duration, ValueError> {
        de_duration(input.into_deserializer())
    }

    #[test]
    fn test_durations() {
        assert_eq!(duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(duration(" 1.5ms ").unwrap(), Duration::from_micros(1500));
        assert_eq!(duration("0.25s").unwrap(), Duration::from_millis(250));
        assert_eq!(duration("3s").unwrap(), Duration::from_secs(3));
        assert!(duration("fast").is_err());
        assert!(duration("-1s").is_err());
        assert!(duration("10").is_err());
    }

    #[test]
    fn test_pixels() {
        let pixels: Result<Pixels, ValueError> = de_pixels("12.5px".into_deserializer());
        assert_eq!(pixels.unwrap(), px(12.5));

        let pixels: Result<Pixels, ValueError> = de_pixels("12.5".into_deserializer());
        assert!(pixels.is_err());

        let pixels: Result<Pixels, ValueError> = de_pixels(8f64.into_deserializer());
        assert_eq!(pixels.unwrap(), px(8.));
    }

    #[test]
    fn test_colors() {
        let color: Result<Rgba, ValueError> = de_rgba("#5ec7f8".into_deserializer());
        assert_eq!(color.unwrap(), rgb_a(0x5EC7F8, 1.));

        let color: Result<Rgba, ValueError> = de_rgba(0x282828u32.into_deserializer());
        assert_eq!(color.unwrap(), rgb_a(0x282828, 1.));

        let color: Result<Rgba, ValueError> = de_rgba(0x1000000u32.into_deserializer());
        assert!(color.is_err());

        let color: Result<Rgba, ValueError> = de_rgba("blue".into_deserializer());
        assert!(color.is_err());
    }
}
