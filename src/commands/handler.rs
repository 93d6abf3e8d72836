//! Slash command handler trait and the reply seam
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Handlers work on plain `Interaction` values and reply through `InteractionReplier`

use async_trait::async_trait;
use log::{debug, error, info};
use thiserror::Error;

use crate::interaction::{Interaction, InteractionKind};

/// Failure to deliver the reply for one interaction
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Discord rejected the reply: {0}")]
    Discord(#[from] serenity::Error),
    #[error("reply transport failed: {0}")]
    Transport(String),
}

/// The one permitted response to an interaction
///
/// Implemented over serenity's HTTP client in production and by recording
/// mocks in tests.
#[async_trait]
pub trait InteractionReplier: Send + Sync {
    async fn reply(&self, interaction: &Interaction, content: &str) -> Result<(), ReplyError>;
}

/// Trait for slash command handlers
///
/// A handler declares the command names it owns and turns a matching
/// interaction into the reply content. Sending the reply is left to
/// [`on_interaction`] so every handler gets the same failure isolation.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn respond(&self, _interaction: &Interaction) -> String {
///         "Pong!".to_string()
///     }
/// }
/// ```
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Build the reply content for a matching interaction
    fn respond(&self, interaction: &Interaction) -> String;
}

/// Outcome of handling one interaction
#[derive(Debug)]
pub enum ReplyAttempt {
    /// Not a chat-input command owned by the handler; nothing was sent
    Ignored,
    /// The reply was delivered
    Replied(String),
    /// The reply failed; the error has already been logged
    Failed(ReplyError),
}

impl ReplyAttempt {
    pub fn was_attempted(&self) -> bool {
        !matches!(self, ReplyAttempt::Ignored)
    }
}

/// Handle one inbound interaction
///
/// Makes at most one reply attempt. A failed reply is logged and returned,
/// never propagated, so one expired interaction cannot affect others.
pub async fn on_interaction(
    handler: &dyn SlashCommandHandler,
    interaction: &Interaction,
    replier: &dyn InteractionReplier,
) -> ReplyAttempt {
    if interaction.kind != InteractionKind::ChatInput {
        debug!(
            "Ignoring {:?} interaction '{}'",
            interaction.kind, interaction.command_name
        );
        return ReplyAttempt::Ignored;
    }

    if !handler
        .command_names()
        .contains(&interaction.command_name.as_str())
    {
        debug!("Ignoring unowned command '{}'", interaction.command_name);
        return ReplyAttempt::Ignored;
    }

    let content = handler.respond(interaction);

    match replier.reply(interaction, &content).await {
        Ok(()) => {
            match interaction.guild_id {
                Some(guild_id) => info!(
                    "/{} completed for user {} in guild {guild_id}",
                    interaction.command_name, interaction.user.id
                ),
                None => info!(
                    "/{} completed for user {}",
                    interaction.command_name, interaction.user.id
                ),
            }
            ReplyAttempt::Replied(content)
        }
        Err(e) => {
            error!(
                "Failed to reply to /{} (interaction {}): {e}",
                interaction.command_name, interaction.id
            );
            ReplyAttempt::Failed(e)
        }
    }
}
