//! Main application handler for the pointer demo

use std::time::Instant;

use glam::Vec2;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::window::{capture_cursor, window_attributes_from_config};
use super::winit_input::WinitInput;
use crate::config::AppConfig;
use crate::error::Result;
use crate::host::{RectScene, WidgetId};
use crate::input::{InputModule, InputReceiver, OperatorId, PointerSnapshot, Rect, SimulatedPointer};

/// Operator driven by the local mouse
const LOCAL_OPERATOR: OperatorId = OperatorId(0);

/// Logs button edges and scrolling from each frame's snapshot
#[derive(Debug, Default)]
struct SnapshotLogger;

impl InputReceiver<PointerSnapshot> for SnapshotLogger {
    fn receive_input(&mut self, snapshot: &PointerSnapshot, _delta_time: f32) {
        if snapshot.primary.started {
            info!(x = snapshot.position.x, y = snapshot.position.y, "Primary pressed");
        }
        if snapshot.secondary.started {
            info!(x = snapshot.position.x, y = snapshot.position.y, "Secondary pressed");
        }
        if snapshot.tertiary.started {
            info!(x = snapshot.position.x, y = snapshot.position.y, "Tertiary pressed");
        }
        if snapshot.scroll != Vec2::ZERO {
            info!(x = snapshot.scroll.x, y = snapshot.scroll.y, "Scrolled");
        }
    }
}

/// Lays out a column of buttons on a panel covering the pointer bounds
///
/// Widgets live in screen space, so the layout is rebuilt whenever the screen
/// size changes.
fn layout_demo_scene(scene: &RectScene, screen_size: Vec2, bounds: Rect) {
    scene.clear();
    scene.resize(screen_size);

    let origin = screen_size / 2.0;
    let panel = Rect::new(
        origin.x + bounds.x,
        origin.y + bounds.y,
        bounds.width,
        bounds.height,
    );
    scene.add_widget("panel", panel, 0);

    let width = panel.width * 0.3;
    let height = panel.height * 0.12;
    let x = panel.center().x - width / 2.0;
    for (row, name) in ["play", "options", "quit"].into_iter().enumerate() {
        let y = panel.y + panel.height * (0.25 + 0.2 * row as f32);
        scene.add_widget(name, Rect::new(x, y, width, height), 1);
    }
}

/// Pointer demo application
pub struct App {
    config: AppConfig,
    window: Option<Window>,
    input: WinitInput,
    scene: RectScene,
    module: InputModule<WidgetId>,
    last_update: Option<Instant>,
}

impl App {
    /// Builds the input module and registers the local operator's pointer
    pub fn new(config: AppConfig) -> Result<Self> {
        info!(profile = %config.profile, "Starting pointer demo");
        info!(?config.window, "Window configuration");

        let input = WinitInput::new(config.pointer.actions.clone());
        let system = input.input();

        let screen = Vec2::new(config.window.width as f32, config.window.height as f32);
        let scene = RectScene::centered(screen);
        layout_demo_scene(&scene, screen, config.pointer.bounds);

        let mut module = InputModule::load(system.clone());
        module.on_device_changed(|notification| {
            info!(
                device = %notification.device.name,
                change = ?notification.change,
                "Device changed"
            );
        });

        let mut pointer =
            SimulatedPointer::new(system, Box::new(scene.clone()), config.pointer.clone())?;
        pointer.register_receiver(Box::new(SnapshotLogger));
        module.register_pointer(LOCAL_OPERATOR, pointer);

        Ok(Self {
            config,
            window: None,
            input,
            scene,
            module,
            last_update: None,
        })
    }

    /// Widget names currently under the local pointer
    fn hovered_names(&self) -> Vec<String> {
        self.module
            .pointer(LOCAL_OPERATOR)
            .map(|pointer| {
                pointer
                    .hovered()
                    .iter()
                    .filter_map(|id| self.scene.widget_name(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn relayout(&mut self, screen_size: Vec2) {
        debug!(width = screen_size.x, height = screen_size.y, "Laying out demo scene");
        layout_demo_scene(&self.scene, screen_size, self.config.pointer.bounds);
    }

    pub fn input_module(&self) -> &InputModule<WidgetId> {
        &self.module
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );

                capture_cursor(&window);
                self.relayout(Vec2::new(size.width as f32, size.height as f32));
                self.window = Some(window);
                self.last_update = Some(Instant::now());
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(last_update) = self.last_update else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        let before = self.hovered_names();
        self.module.run_frame(delta_time);
        let after = self.hovered_names();
        if before != after {
            info!(hovered = ?after, "Hover changed");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                if let Some(pointer) = self.module.pointer_mut(LOCAL_OPERATOR) {
                    pointer.teardown();
                }
                self.module.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.relayout(Vec2::new(size.width as f32, size.height as f32));
            }
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    capture_cursor(window);
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.handle_device_event(device_id, &event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_stacks_buttons_over_panel() {
        let screen = Vec2::new(1280.0, 720.0);
        let scene = RectScene::centered(screen);
        layout_demo_scene(&scene, screen, Rect::centered(1280.0, 720.0));

        let play = scene.widget(WidgetId(1)).expect("play button");
        assert_eq!(play.name, "play");
        assert!(Rect::new(0.0, 0.0, 1280.0, 720.0).contains(play.rect.center()));
        assert_eq!(scene.widget_name(WidgetId(0)).as_deref(), Some("panel"));
        assert_eq!(scene.widget_name(WidgetId(3)).as_deref(), Some("quit"));
    }

    #[test]
    fn test_relayout_replaces_widgets() {
        let scene = RectScene::centered(Vec2::new(100.0, 100.0));
        let bounds = Rect::centered(100.0, 100.0);
        layout_demo_scene(&scene, Vec2::new(100.0, 100.0), bounds);
        layout_demo_scene(&scene, Vec2::new(200.0, 200.0), bounds);

        assert!(scene.widget(WidgetId(0)).is_none());
        let panel = scene.widget(WidgetId(4)).expect("new panel");
        assert_eq!(panel.rect, Rect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_app_registers_local_pointer() {
        let app = App::new(AppConfig::default()).expect("pointer actions exist");

        assert!(app.input_module().pointer(LOCAL_OPERATOR).is_some());
        assert!(app.hovered_names().is_empty());
    }
}
