//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::Rect;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Simulated Pointer".to_string(),
            width: 1280.0,
            height: 720.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Names of the actions the pointer reads and reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerActions {
    pub delta: String,
    pub scroll: String,
    pub select: String,
    pub select_alternate: String,
    pub select_tertiary: String,
}

impl Default for PointerActions {
    fn default() -> Self {
        Self {
            delta: "Delta".to_string(),
            scroll: "Scroll".to_string(),
            select: "Select".to_string(),
            select_alternate: "SelectAlternate".to_string(),
            select_tertiary: "SelectTertiary".to_string(),
        }
    }
}

/// Simulated pointer tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Pointer units per second per unit of device delta, keyboard & mouse
    pub speed_mouse_keyboard: f32,
    /// Pointer units per second per unit of device delta, gamepad
    pub speed_gamepad: f32,
    /// Overlay-local rectangle the pointer is kept inside
    pub bounds: Rect,
    pub actions: PointerActions,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            speed_mouse_keyboard: 60.0,
            speed_gamepad: 900.0,
            bounds: Rect::centered(1280.0, 720.0),
            actions: PointerActions::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    pub window: WindowConfig,
    /// Simulated pointer configuration
    pub pointer: PointerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_POINTER__SPEED_GAMEPAD=900)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self> {
        let config_dir = Self::find_config_dir().unwrap_or_else(|| PathBuf::from("config"));
        Self::load_from_dir(&config_dir, profile)
    }

    /// Loads a profile from an explicit config directory, then applies `APP_` overrides
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self> {
        let profile_path = dir.join(profile);

        let config = Config::builder()
            .add_source(File::from(profile_path.as_path()).required(false))
            // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    /// Serializes tests that load config, since env overrides are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_missing_profile_falls_back_to_defaults() {
        let _env = env_lock();
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from_dir(dir.path(), "nonexistent").expect("load");

        assert_eq!(config.profile, "nonexistent");
        assert_eq!(config.pointer.actions, PointerActions::default());
        assert_eq!(config.pointer.speed_gamepad, PointerConfig::default().speed_gamepad);
    }

    #[test]
    fn test_profile_file_overrides_pointer_settings() {
        let _env = env_lock();
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("custom.toml"),
            r#"
[pointer]
speed_mouse_keyboard = 12.5
speed_gamepad = 300.0

[pointer.bounds]
x = 0.0
y = 0.0
width = 640.0
height = 480.0

[pointer.actions]
select = "Confirm"
"#,
        )
        .expect("write config");

        let config = AppConfig::load_from_dir(dir.path(), "custom").expect("load");

        assert_eq!(config.pointer.speed_mouse_keyboard, 12.5);
        assert_eq!(config.pointer.speed_gamepad, 300.0);
        assert_eq!(config.pointer.bounds, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(config.pointer.actions.select, "Confirm");
        assert_eq!(config.pointer.actions.delta, "Delta");
        assert_eq!(config.window.title, WindowConfig::default().title);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let _env = env_lock();
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("broken.toml"), "[pointer\nspeed = ").expect("write config");

        let err = AppConfig::load_from_dir(dir.path(), "broken").unwrap_err();
        assert!(matches!(err, crate::error::InputError::Config(_)));
    }

    #[test]
    fn test_env_overrides_nested_pointer_settings() {
        let _env = env_lock();
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("custom.toml"),
            "[pointer]\nspeed_gamepad = 300.0\n",
        )
        .expect("write config");

        // SAFETY: config tests hold ENV_LOCK while the variable is set
        unsafe { std::env::set_var("APP_POINTER__SPEED_GAMEPAD", "123.0") };
        let loaded = AppConfig::load_from_dir(dir.path(), "custom");
        unsafe { std::env::remove_var("APP_POINTER__SPEED_GAMEPAD") };

        let config = loaded.expect("load");
        assert_eq!(config.pointer.speed_gamepad, 123.0);
        assert_eq!(config.profile, "custom");
    }
}
