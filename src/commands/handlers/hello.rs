//! /hello handler
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::commands::handler::SlashCommandHandler;
use crate::core::truncate_for_message;
use crate::interaction::Interaction;

/// Option users can pass to greet someone else
pub const NAME_OPTION: &str = "name";

type NameSource = fn(&Interaction) -> Option<&str>;

/// Where the greeted name comes from, in priority order
///
/// The first source yielding a non-empty value wins. The username is always
/// set, so the chain never comes up empty.
const NAME_SOURCES: [NameSource; 4] = [
    requested_name,
    guild_nick,
    global_name,
    username,
];

fn requested_name(interaction: &Interaction) -> Option<&str> {
    interaction.string_option(NAME_OPTION)
}

fn guild_nick(interaction: &Interaction) -> Option<&str> {
    interaction.user.guild_nick.as_deref()
}

fn global_name(interaction: &Interaction) -> Option<&str> {
    interaction.user.global_name.as_deref()
}

fn username(interaction: &Interaction) -> Option<&str> {
    Some(interaction.user.username.as_str())
}

/// Pick the name to greet
pub fn resolve_name(interaction: &Interaction) -> &str {
    NAME_SOURCES
        .iter()
        .filter_map(|source| source(interaction))
        .find(|name| !name.is_empty())
        .unwrap_or(interaction.user.username.as_str())
}

pub fn greeting(name: &str) -> String {
    truncate_for_message(&format!("Hello, {name}!"))
}

/// Handler for /hello
pub struct HelloHandler;

impl SlashCommandHandler for HelloHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["hello"]
    }

    fn respond(&self, interaction: &Interaction) -> String {
        greeting(resolve_name(interaction))
    }
}
