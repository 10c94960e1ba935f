//! In-memory UI scene of rectangular widgets
//!
//! `RectScene` is a cheap handle: clones share the same widgets and event log,
//! so a driver can keep one clone while a pointer owns another.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use tracing::debug;

use crate::input::{PointerEventData, PointerEventKind, Rect, UiScene};

/// Widget handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u32);

/// A rectangular hit area in screen space
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    pub rect: Rect,
    /// Higher is closer to the viewer
    pub depth: i32,
}

/// One executed pointer event
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedEvent {
    pub target: WidgetId,
    pub kind: PointerEventKind,
    pub data: PointerEventData,
}

#[derive(Debug)]
struct SceneState {
    widgets: Vec<Widget>,
    next_id: u32,
    screen_size: Vec2,
    overlay_origin: Vec2,
    pointer_visible: bool,
    events: Vec<ExecutedEvent>,
}

/// Shared handle to a rectangle scene
#[derive(Debug, Clone)]
pub struct RectScene {
    state: Rc<RefCell<SceneState>>,
}

impl RectScene {
    /// Creates an empty scene
    ///
    /// # Arguments
    /// * `screen_size` - Screen size in pixels, used for viewport coordinates
    /// * `overlay_origin` - Screen position of the pointer overlay's local origin
    pub fn new(screen_size: Vec2, overlay_origin: Vec2) -> Self {
        Self {
            state: Rc::new(RefCell::new(SceneState {
                widgets: Vec::new(),
                next_id: 0,
                screen_size,
                overlay_origin,
                pointer_visible: true,
                events: Vec::new(),
            })),
        }
    }

    /// Scene whose overlay origin is the center of the screen
    pub fn centered(screen_size: Vec2) -> Self {
        Self::new(screen_size, screen_size / 2.0)
    }

    pub fn add_widget(&self, name: impl Into<String>, rect: Rect, depth: i32) -> WidgetId {
        let mut state = self.state.borrow_mut();
        let id = WidgetId(state.next_id);
        state.next_id += 1;
        state.widgets.push(Widget {
            id,
            name: name.into(),
            rect,
            depth,
        });
        id
    }

    /// Removes a widget; its handle stops being alive
    pub fn remove_widget(&self, id: WidgetId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.widgets.len();
        state.widgets.retain(|w| w.id != id);
        state.widgets.len() != before
    }

    pub fn widget(&self, id: WidgetId) -> Option<Widget> {
        self.state
            .borrow()
            .widgets
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub fn widget_name(&self, id: WidgetId) -> Option<String> {
        self.widget(id).map(|w| w.name)
    }

    /// Removes every widget; outstanding handles stop being alive
    pub fn clear(&self) {
        self.state.borrow_mut().widgets.clear();
    }

    /// Updates the screen size and recenters the overlay origin
    pub fn resize(&self, screen_size: Vec2) {
        let mut state = self.state.borrow_mut();
        state.screen_size = screen_size;
        state.overlay_origin = screen_size / 2.0;
    }

    /// Copy of the event log
    pub fn events(&self) -> Vec<ExecutedEvent> {
        self.state.borrow().events.clone()
    }

    /// Drains the event log
    pub fn take_events(&self) -> Vec<ExecutedEvent> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }

    pub fn pointer_visible(&self) -> bool {
        self.state.borrow().pointer_visible
    }
}

impl UiScene<WidgetId> for RectScene {
    fn local_to_screen(&self, local: Vec2) -> Vec2 {
        self.state.borrow().overlay_origin + local
    }

    fn local_to_viewport(&self, local: Vec2) -> Vec2 {
        let state = self.state.borrow();
        let screen = state.overlay_origin + local;
        if state.screen_size.x <= 0.0 || state.screen_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        screen / state.screen_size
    }

    fn raycast_all(&self, screen_pos: Vec2) -> Vec<WidgetId> {
        let state = self.state.borrow();
        let mut hits: Vec<&Widget> = state
            .widgets
            .iter()
            .filter(|w| w.rect.contains(screen_pos))
            .collect();
        // Stable: equal depths keep insertion order
        hits.sort_by_key(|w| std::cmp::Reverse(w.depth));
        hits.into_iter().map(|w| w.id).collect()
    }

    fn execute(&mut self, target: &WidgetId, kind: PointerEventKind, data: &PointerEventData) {
        let mut state = self.state.borrow_mut();
        if let Some(widget) = state.widgets.iter().find(|w| w.id == *target) {
            debug!(widget = %widget.name, ?kind, pos = ?data.position, "Pointer event");
        }
        state.events.push(ExecutedEvent {
            target: *target,
            kind,
            data: *data,
        });
    }

    fn is_alive(&self, target: &WidgetId) -> bool {
        self.state.borrow().widgets.iter().any(|w| w.id == *target)
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        self.state.borrow_mut().pointer_visible = visible;
    }
}
