//! In-memory host implementations
//!
//! Device-free implementations of the host interfaces, used to drive the input
//! core from scripts, tests and health checks, and as the backing store for
//! the winit adapter.

mod rect_scene;
mod virtual_input;

pub use rect_scene::{ExecutedEvent, RectScene, Widget, WidgetId};
pub use virtual_input::{ActionKind, VirtualInput};
