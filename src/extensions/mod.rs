/// Controls whether handled mouse events propagate or keep their default.
mod mouse_behavior;
pub use mouse_behavior::*;
