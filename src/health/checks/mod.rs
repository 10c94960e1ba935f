//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod module;
pub mod pointer;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use module::ModuleCheck;
pub use pointer::PointerCheck;
