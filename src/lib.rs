//! Simulated UI Pointer
//!
//! Per-operator input snapshots and a simulated UI pointer: device deltas move a
//! virtual cursor over a UI scene, which resolves hover and selection and
//! dispatches pointer events to the widgets under it.

/// Demo application - windowing and winit input translation
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Layered configuration (profile files + APP_ environment overrides)
pub mod config;

/// Error types
pub mod error;

/// Health checks for startup validation and CI
pub mod health;

/// In-memory host implementations (action system, rectangle scene)
pub mod host;

/// Input core - router, module, pointer, listeners
pub mod input;
