//! Demo application module
//!
//! Handles windowing and turns raw winit input into action input for the
//! simulated pointer.

mod runner;
mod window;
mod winit_input;

pub use runner::App;
pub use window::{capture_cursor, window_attributes_from_config};
pub use winit_input::WinitInput;
