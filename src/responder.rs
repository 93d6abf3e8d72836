//! # Interaction Responder
//!
//! Gateway event handler that feeds chat-input commands to the slash command
//! handler and sends its reply over Discord's HTTP API.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::{Client, Context, EventHandler};
use serenity::http::Http;
use serenity::model::application::Interaction as GatewayInteraction;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::InteractionId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::commands::handler::{on_interaction, InteractionReplier, ReplyError, SlashCommandHandler};
use crate::core::BotConfig;
use crate::interaction::Interaction;

/// Gateway session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
}

/// Sends interaction replies through Discord's HTTP API
pub struct HttpReplier {
    http: Arc<Http>,
}

impl HttpReplier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl InteractionReplier for HttpReplier {
    async fn reply(&self, interaction: &Interaction, content: &str) -> Result<(), ReplyError> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(content),
        );

        self.http
            .create_interaction_response(
                InteractionId::new(interaction.id),
                &interaction.token,
                &response,
                Vec::new(),
            )
            .await?;
        Ok(())
    }
}

/// Serenity event handler
pub struct Handler {
    command_handler: Arc<dyn SlashCommandHandler>,
    connected: AtomicBool,
}

impl Handler {
    pub fn new(command_handler: Arc<dyn SlashCommandHandler>) -> Self {
        Handler {
            command_handler,
            connected: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.connected.load(Ordering::Acquire) {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        }
    }

    /// Record a ready event, returning true on the first transition to connected
    fn mark_connected(&self) -> bool {
        !self.connected.swap(true, Ordering::AcqRel)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        if self.mark_connected() {
            info!("Ready! Logged in as {}", ready.user.tag());
        } else {
            info!("Session resumed as {}", ready.user.tag());
        }
        info!("Connected to {} guilds", ready.guilds.len());
        debug!("Gateway session ID: {:?}", ready.session_id);
    }

    async fn interaction_create(&self, ctx: Context, interaction: GatewayInteraction) {
        match interaction {
            GatewayInteraction::Command(command) => {
                let interaction = Interaction::from(&command);
                let replier = HttpReplier::new(ctx.http.clone());
                on_interaction(self.command_handler.as_ref(), &interaction, &replier).await;
            }
            other => {
                debug!("Ignoring non-command interaction {:?}", other.kind());
            }
        }
    }
}

/// Connect to the gateway and serve interactions until the process is stopped
pub async fn run(config: &BotConfig, command_handler: Arc<dyn SlashCommandHandler>) -> Result<()> {
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(command_handler))
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Connecting to Discord gateway with intents {intents:?}...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_handler;

    #[test]
    fn test_handler_starts_disconnected() {
        let handler = Handler::new(create_handler());
        assert_eq!(handler.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_handler_connects_once() {
        let handler = Handler::new(create_handler());

        assert!(handler.mark_connected());
        assert_eq!(handler.state(), SessionState::Connected);

        // A second ready (after a reconnect) keeps the state and is not a new transition
        assert!(!handler.mark_connected());
        assert_eq!(handler.state(), SessionState::Connected);
    }
}
