//! Window creation and system cursor capture

use tracing::warn;
use winit::dpi::LogicalSize;
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowAttributes};

use crate::config::WindowConfig;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Hides the system cursor and locks it so only relative motion arrives
///
/// Platforms without locking get a confined cursor instead.
pub fn capture_cursor(window: &Window) {
    window.set_cursor_visible(false);

    if let Err(locked) = window.set_cursor_grab(CursorGrabMode::Locked)
        && let Err(confined) = window.set_cursor_grab(CursorGrabMode::Confined)
    {
        warn!(%locked, %confined, "Could not capture the system cursor");
    }
}
