//! Input handling core
//!
//! Turns host action input into per-operator pointer interactions:
//! - Polls the host input system once per frame, before any consumer
//! - Moves a simulated pointer by speed-scaled device deltas, clamped to an overlay
//! - Hit-tests a UI scene and emits enter/exit/down/click/up/deselect/move events
//! - Buffers a per-frame snapshot and hands it to registered receivers
//!
//! # Architecture
//!
//! ```text
//! TickGroup::Input             InputRouter ── InputSystem::update()
//!                                                  │ (notifications)
//!                                                  ↓
//! TickGroup::InputTransmission InputModule
//!                               ├─ any-button / device-change listeners
//!                               └─ per operator: SimulatedPointer
//!                                     ├─ UiScene (raycast, execute)
//!                                     └─ InputReceivers (PointerSnapshot)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut module = InputModule::load(system.clone());
//! let pointer = SimulatedPointer::new(player_input, Box::new(scene), config.pointer)?;
//! module.register_pointer(OperatorId(0), pointer);
//!
//! // Each frame
//! module.run_frame(delta_time);
//! ```

mod action;
mod channel;
mod events;
mod host;
mod listener;
mod module;
mod pointer;
mod receiver;
mod rect;
mod router;
mod snapshot;
mod tick;

// Re-export public API
pub use action::{
    ActionEvent, ActionId, ActionMapId, ActionPhase, ButtonControl, ControlScheme, DeviceChange,
    DeviceNotification, InputDevice, PlayerNotification,
};
pub use channel::{Broadcaster, Subscription};
pub use events::{PointerButton, PointerEventData, PointerEventKind};
pub use host::{InputSystem, PlayerInput, UiScene};
pub use listener::{ActionMapHandler, ActionMapListener};
pub use module::{InputModule, OperatorId};
pub use pointer::SimulatedPointer;
pub use receiver::{InputReceiver, ReceiverId, ReceiverList};
pub use rect::Rect;
pub use router::InputRouter;
pub use snapshot::{ButtonFlags, PointerSnapshot};
pub use tick::{TickGroup, Tickable};
