//! Process configuration loaded from the environment
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Separate responder and registrar configs, token redacted in Debug output

use std::fmt;
use thiserror::Error;

pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const DISCORD_CLIENT_ID: &str = "DISCORD_CLIENT_ID";
pub const DISCORD_GUILD_ID: &str = "DISCORD_GUILD_ID";
pub const DISCORD_REGISTER_GLOBAL: &str = "DISCORD_REGISTER_GLOBAL";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Missing or malformed environment configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required. Check your .env file.")]
    Missing(&'static str),
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Where the registrar writes the command set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Guild commands update instantly, used during development
    Guild(u64),
    /// Global commands can take up to an hour to propagate
    Global,
}

impl fmt::Display for RegistrationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationScope::Guild(id) => write!(f, "guild {id}"),
            RegistrationScope::Global => write!(f, "global scope"),
        }
    }
}

/// Configuration for the long-running interaction responder
#[derive(Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub log_level: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            discord_token: required(&lookup, DISCORD_TOKEN)?,
            log_level: log_level(&lookup),
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Configuration for the one-shot command registrar
#[derive(Clone)]
pub struct RegistrarConfig {
    pub discord_token: String,
    pub application_id: u64,
    pub scope: RegistrationScope,
    pub log_level: String,
}

impl RegistrarConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    ///
    /// The guild id is only required when registering into a guild, which is
    /// the default. Setting `DISCORD_REGISTER_GLOBAL` switches to the global scope.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, DISCORD_TOKEN)?;
        let application_id = parse_id(DISCORD_CLIENT_ID, &required(&lookup, DISCORD_CLIENT_ID)?)?;

        let scope = if flag(&lookup, DISCORD_REGISTER_GLOBAL) {
            RegistrationScope::Global
        } else {
            let guild_id = required(&lookup, DISCORD_GUILD_ID)?;
            RegistrationScope::Guild(parse_id(DISCORD_GUILD_ID, &guild_id)?)
        };

        Ok(Self {
            discord_token,
            application_id,
            scope,
            log_level: log_level(&lookup),
        })
    }
}

impl fmt::Debug for RegistrarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrarConfig")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("scope", &self.scope)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_id(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    let id = value.parse::<u64>().map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("expected a numeric Discord id, got '{value}' ({e})"),
    })?;

    // Discord ids are snowflakes and never zero
    if id == 0 {
        return Err(ConfigError::Invalid {
            var,
            reason: "id must be non-zero".to_string(),
        });
    }
    Ok(id)
}

fn flag<F>(lookup: &F, var: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn log_level<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_LEVEL)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_bot_config_requires_token() {
        let result = BotConfig::from_lookup(env(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing(DISCORD_TOKEN));
    }

    #[test]
    fn test_bot_config_blank_token_is_missing() {
        let result = BotConfig::from_lookup(env(&[(DISCORD_TOKEN, "   ")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing(DISCORD_TOKEN));
    }

    #[test]
    fn test_bot_config_defaults_log_level() {
        let config = BotConfig::from_lookup(env(&[(DISCORD_TOKEN, "abc")])).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bot_config_debug_redacts_token() {
        let config = BotConfig::from_lookup(env(&[(DISCORD_TOKEN, "super-secret")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_registrar_config_guild_scope() {
        let config = RegistrarConfig::from_lookup(env(&[
            (DISCORD_TOKEN, "abc"),
            (DISCORD_CLIENT_ID, "1234"),
            (DISCORD_GUILD_ID, "5678"),
            (LOG_LEVEL, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.application_id, 1234);
        assert_eq!(config.scope, RegistrationScope::Guild(5678));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_registrar_config_requires_each_variable() {
        let missing_token =
            RegistrarConfig::from_lookup(env(&[(DISCORD_CLIENT_ID, "1"), (DISCORD_GUILD_ID, "2")]));
        assert_eq!(missing_token.unwrap_err(), ConfigError::Missing(DISCORD_TOKEN));

        let missing_client =
            RegistrarConfig::from_lookup(env(&[(DISCORD_TOKEN, "t"), (DISCORD_GUILD_ID, "2")]));
        assert_eq!(missing_client.unwrap_err(), ConfigError::Missing(DISCORD_CLIENT_ID));

        let missing_guild =
            RegistrarConfig::from_lookup(env(&[(DISCORD_TOKEN, "t"), (DISCORD_CLIENT_ID, "1")]));
        assert_eq!(missing_guild.unwrap_err(), ConfigError::Missing(DISCORD_GUILD_ID));
    }

    #[test]
    fn test_registrar_config_rejects_non_numeric_ids() {
        let result = RegistrarConfig::from_lookup(env(&[
            (DISCORD_TOKEN, "t"),
            (DISCORD_CLIENT_ID, "not-a-number"),
            (DISCORD_GUILD_ID, "2"),
        ]));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid { var: DISCORD_CLIENT_ID, .. }
        ));
    }

    #[test]
    fn test_registrar_config_rejects_zero_ids() {
        let result = RegistrarConfig::from_lookup(env(&[
            (DISCORD_TOKEN, "t"),
            (DISCORD_CLIENT_ID, "1"),
            (DISCORD_GUILD_ID, "0"),
        ]));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid { var: DISCORD_GUILD_ID, .. }
        ));
    }

    #[test]
    fn test_registrar_config_global_scope_skips_guild() {
        let config = RegistrarConfig::from_lookup(env(&[
            (DISCORD_TOKEN, "t"),
            (DISCORD_CLIENT_ID, "1"),
            (DISCORD_REGISTER_GLOBAL, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.scope, RegistrationScope::Global);
    }
}
