//! # Slash Commands (/)
//!
//! Definitions of the commands this bot registers with Discord.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

mod hello;

use crate::commands::definition::CommandDefinition;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();

    // Greeting commands
    commands.extend(hello::create_commands());

    commands
}
