mod slider;
pub use slider::*;

mod tooltip;
pub use tooltip::*;
