//! Theme system providing spacing, animation durations, colors and text styles.
//!
//! Themes are built from one of the [`ThemePreset`]s, optionally layered with
//! [`ThemeOverrides`], or passed through unchanged when already complete.

mod schema;
pub use schema::*;

mod preset;
pub use preset::*;

mod overrides;
pub use overrides::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
