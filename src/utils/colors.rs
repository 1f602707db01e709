use gpui::{Hsla, Rgba};

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Parses `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
pub fn parse_hex_color(string: &str) -> Option<Rgba> {
    let hex = string.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.chars().all(|char| char.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;

    match hex.len() {
        6 => Some(rgb_a(value, 1.)),
        8 => Some(rgb_a(value >> 8, (value & 0xFF) as f32 / 255.)),
        _ => None,
    }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Returns a new color with its alpha multiplied by `factor`.
    fn fade(self, factor: f32) -> Self;

    fn to_hsla(self) -> Hsla;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn fade(mut self, factor: f32) -> Self {
        self.a = (self.a * factor).clamp(0., 1.);
        self
    }

    fn to_hsla(self) -> Hsla {
        Hsla::from(self)
    }
}
