//! # Interactions
//!
//! Transport-independent view of an inbound Discord interaction. Handlers only
//! see these values, never serenity's gateway types.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use serde_json::{json, Value};
use serenity::model::application::{CommandDataOptionValue, CommandInteraction, CommandType};
use std::collections::HashMap;

/// What kind of interaction Discord delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// A slash command typed into the chat input
    ChatInput,
    /// A user or message context menu command
    ContextMenu,
    /// Anything else (components, modals, autocomplete)
    Other,
}

/// The user who invoked the interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokingUser {
    pub id: u64,
    /// Account username, always present
    pub username: String,
    /// Account-wide display name
    pub global_name: Option<String>,
    /// Per-guild nickname, only set when invoked inside a guild
    pub guild_nick: Option<String>,
}

/// A single inbound interaction
///
/// `id` and `token` are the handle the transport needs to send the reply.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub id: u64,
    pub token: String,
    pub kind: InteractionKind,
    pub command_name: String,
    pub options: HashMap<String, Value>,
    pub user: InvokingUser,
    pub guild_id: Option<u64>,
}

impl Interaction {
    /// String value of a named option, if it was supplied as a string
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(Value::as_str)
    }
}

impl From<&CommandInteraction> for Interaction {
    fn from(command: &CommandInteraction) -> Self {
        let kind = match command.data.kind {
            CommandType::ChatInput => InteractionKind::ChatInput,
            CommandType::User | CommandType::Message => InteractionKind::ContextMenu,
            _ => InteractionKind::Other,
        };

        let options = command
            .data
            .options
            .iter()
            .filter_map(|opt| option_value(&opt.value).map(|value| (opt.name.clone(), value)))
            .collect();

        Interaction {
            id: command.id.get(),
            token: command.token.clone(),
            kind,
            command_name: command.data.name.clone(),
            options,
            user: InvokingUser {
                id: command.user.id.get(),
                username: command.user.name.clone(),
                global_name: command.user.global_name.clone(),
                guild_nick: command.member.as_ref().and_then(|m| m.nick.clone()),
            },
            guild_id: command.guild_id.map(|g| g.get()),
        }
    }
}

/// Plain JSON value of a top-level option; subcommands and entity ids are skipped
fn option_value(value: &CommandDataOptionValue) -> Option<Value> {
    match value {
        CommandDataOptionValue::String(s) => Some(json!(s)),
        CommandDataOptionValue::Integer(i) => Some(json!(i)),
        CommandDataOptionValue::Number(n) => Some(json!(n)),
        CommandDataOptionValue::Boolean(b) => Some(json!(b)),
        _ => None,
    }
}
