//! # Command System
//!
//! Slash command (/) definitions and interaction handling.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod definition;
pub mod handler;
pub mod handlers;
pub mod slash;

// Re-export handler infrastructure
pub use definition::{CommandDefinition, CommandOption, DefinitionError};
pub use handler::{on_interaction, InteractionReplier, ReplyAttempt, ReplyError, SlashCommandHandler};
pub use handlers::create_handler;
pub use slash::create_slash_commands;
