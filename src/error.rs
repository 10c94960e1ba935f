//! Error types for input setup

use thiserror::Error;

/// Errors raised while wiring input components to a host
///
/// Per-frame paths never fail; only construction can.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("action `{0}` not found in player input")]
    ActionNotFound(String),

    #[error("action map `{0}` not found in player input")]
    ActionMapNotFound(String),

    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T, E = InputError> = std::result::Result<T, E>;
