//! # Command Registrar
//!
//! One-shot registration of the bot's slash commands. Registration is a bulk
//! overwrite: whatever was registered in the scope before is replaced.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use async_trait::async_trait;
use log::info;
use serenity::builder::CreateCommand;
use serenity::http::Http;
use serenity::model::application::Command;
use serenity::model::id::{ApplicationId, GuildId};
use std::sync::Arc;
use thiserror::Error;

use crate::commands::definition::{validate_all, CommandDefinition, DefinitionError};
use crate::core::RegistrationScope;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("no command definitions to register")]
    Empty,
    #[error("invalid command definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
    #[error("Discord rejected command registration: {0}")]
    Discord(#[from] serenity::Error),
}

/// Transport that replaces the command set of a scope
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Overwrite every command in `scope`, returning how many are now registered
    async fn overwrite_commands(
        &self,
        scope: RegistrationScope,
        definitions: &[CommandDefinition],
    ) -> Result<usize, RegistrationError>;
}

/// Registrar backed by Discord's HTTP API
pub struct HttpRegistrar {
    http: Arc<Http>,
}

impl HttpRegistrar {
    /// `application_id` must be non-zero; `RegistrarConfig` guarantees it
    pub fn new(token: &str, application_id: u64) -> Self {
        let http = Http::new(token);
        http.set_application_id(ApplicationId::new(application_id));
        Self {
            http: Arc::new(http),
        }
    }
}

#[async_trait]
impl CommandRegistrar for HttpRegistrar {
    async fn overwrite_commands(
        &self,
        scope: RegistrationScope,
        definitions: &[CommandDefinition],
    ) -> Result<usize, RegistrationError> {
        let builders: Vec<CreateCommand> =
            definitions.iter().map(CommandDefinition::to_builder).collect();

        let registered = match scope {
            RegistrationScope::Guild(guild_id) => {
                GuildId::new(guild_id)
                    .set_commands(&self.http, builders)
                    .await?
            }
            RegistrationScope::Global => Command::set_global_commands(&self.http, builders).await?,
        };

        Ok(registered.len())
    }
}

/// Validate and register a full command set
///
/// Nothing is sent when the set is empty or any definition is invalid.
/// Transport failures are returned as-is; there is no retry.
pub async fn register(
    registrar: &dyn CommandRegistrar,
    scope: RegistrationScope,
    definitions: &[CommandDefinition],
) -> Result<usize, RegistrationError> {
    if definitions.is_empty() {
        return Err(RegistrationError::Empty);
    }
    validate_all(definitions)?;

    let names: Vec<String> = definitions.iter().map(|d| format!("/{}", d.name)).collect();
    info!("Registering {} for {scope}...", names.join(", "));

    let count = registrar.overwrite_commands(scope, definitions).await?;

    info!("Registration complete: {count} command(s) registered for {scope}");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_slash_commands;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MockRegistrar {
        calls: Mutex<Vec<(RegistrationScope, Vec<String>)>>,
        fail: bool,
    }

    #[async_trait]
    impl CommandRegistrar for MockRegistrar {
        async fn overwrite_commands(
            &self,
            scope: RegistrationScope,
            definitions: &[CommandDefinition],
        ) -> Result<usize, RegistrationError> {
            let names = definitions.iter().map(|d| d.name.clone()).collect();
            self.calls.lock().await.push((scope, names));
            if self.fail {
                return Err(serenity::Error::Other("401: Unauthorized").into());
            }
            Ok(definitions.len())
        }
    }

    #[tokio::test]
    async fn test_register_sends_full_set_once() {
        let registrar = MockRegistrar::default();
        let scope = RegistrationScope::Guild(99);

        let count = register(&registrar, scope, &create_slash_commands())
            .await
            .unwrap();

        assert_eq!(count, 1);
        let calls = registrar.calls.lock().await;
        assert_eq!(calls.as_slice(), &[(scope, vec!["hello".to_string()])]);
    }

    #[tokio::test]
    async fn test_register_global_scope() {
        let registrar = MockRegistrar::default();

        register(&registrar, RegistrationScope::Global, &create_slash_commands())
            .await
            .unwrap();

        assert_eq!(registrar.calls.lock().await[0].0, RegistrationScope::Global);
    }

    #[tokio::test]
    async fn test_register_empty_set_makes_no_call() {
        let registrar = MockRegistrar::default();

        let result = register(&registrar, RegistrationScope::Global, &[]).await;

        assert!(matches!(result, Err(RegistrationError::Empty)));
        assert!(registrar.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_register_invalid_definition_makes_no_call() {
        let registrar = MockRegistrar::default();
        let definitions = vec![CommandDefinition::new("Hello", "Uppercase is not allowed")];

        let result = register(&registrar, RegistrationScope::Guild(1), &definitions).await;

        assert!(matches!(
            result,
            Err(RegistrationError::InvalidDefinition(DefinitionError::InvalidName(_)))
        ));
        assert!(registrar.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_register_transport_failure_is_not_retried() {
        let registrar = MockRegistrar {
            fail: true,
            ..Default::default()
        };

        let result = register(&registrar, RegistrationScope::Guild(1), &create_slash_commands()).await;

        assert!(matches!(result, Err(RegistrationError::Discord(_))));
        assert_eq!(registrar.calls.lock().await.len(), 1);
    }
}
