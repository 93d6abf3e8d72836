//! Greeting slash command: /hello

use crate::commands::definition::CommandDefinition;
use crate::commands::handlers::hello::NAME_OPTION;

/// Creates greeting commands
pub fn create_commands() -> Vec<CommandDefinition> {
    vec![create_hello_command()]
}

/// Creates the hello command
///
/// Guild-only: the command is hidden in direct messages.
fn create_hello_command() -> CommandDefinition {
    CommandDefinition::new("hello", "Have the bot say hello")
        .string_option(NAME_OPTION, "Name to greet instead of yours", false)
        .dm_permission(false)
}
