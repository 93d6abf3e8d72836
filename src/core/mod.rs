//! # Core Module
//!
//! Configuration and Discord limits shared by both binaries.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::{BotConfig, ConfigError, RegistrarConfig, RegistrationScope};
pub use response::{truncate_for_message, MESSAGE_LIMIT};
