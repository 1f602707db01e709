//! A themed slider component for gpui.
//!
//! Call [`init`] once at startup to install the default theme, then create
//! sliders with `cx.new(|cx| Slider::new(options, cx))`.

pub mod components;

pub mod extensions;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt, generate_element_id, parse_hex_color, rgb_a};

mod init;
pub use init::*;
