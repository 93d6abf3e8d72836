//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod hello;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create the command handler served by the bot
pub fn create_handler() -> Arc<dyn SlashCommandHandler> {
    Arc::new(hello::HelloHandler)
}
