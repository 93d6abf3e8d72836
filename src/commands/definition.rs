//! Command definitions and Discord's validation rules for them
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: String options, dm_permission, name/description/ordering checks

use regex::Regex;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 100;
pub const MAX_OPTIONS: usize = 25;
pub const MAX_COMMANDS: usize = 100;

/// A definition Discord would reject
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("invalid name '{0}': must be 1-32 lowercase letters, digits, '-' or '_'")]
    InvalidName(String),
    #[error("description of '{0}' must be 1-100 characters")]
    InvalidDescription(String),
    #[error("command '{command}' has {count} options, at most 25 are allowed")]
    TooManyOptions { command: String, count: usize },
    #[error("command '{command}' declares option '{option}' twice")]
    DuplicateOption { command: String, option: String },
    #[error("command '{command}': required option '{option}' must come before optional ones")]
    RequiredAfterOptional { command: String, option: String },
    #[error("command '{0}' is defined twice")]
    DuplicateCommand(String),
    #[error("{0} commands given, at most 100 are allowed per scope")]
    TooManyCommands(usize),
}

/// A string option on a slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// A slash command as it will be registered with Discord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
    pub dm_permission: bool,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            dm_permission: true,
        }
    }

    /// Add a string option
    pub fn string_option(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.options.push(CommandOption {
            name: name.into(),
            description: description.into(),
            required,
        });
        self
    }

    /// Allow or forbid the command in direct messages
    pub fn dm_permission(mut self, allowed: bool) -> Self {
        self.dm_permission = allowed;
        self
    }

    /// Check the definition against Discord's constraints
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate_name(&self.name)?;
        validate_description(&self.name, &self.description)?;

        if self.options.len() > MAX_OPTIONS {
            return Err(DefinitionError::TooManyOptions {
                command: self.name.clone(),
                count: self.options.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut optional_seen = false;
        for option in &self.options {
            validate_name(&option.name)?;
            validate_description(&option.name, &option.description)?;

            if !seen.insert(option.name.as_str()) {
                return Err(DefinitionError::DuplicateOption {
                    command: self.name.clone(),
                    option: option.name.clone(),
                });
            }

            if option.required && optional_seen {
                return Err(DefinitionError::RequiredAfterOptional {
                    command: self.name.clone(),
                    option: option.name.clone(),
                });
            }
            optional_seen |= !option.required;
        }

        Ok(())
    }

    /// Build the serenity builder for this definition
    pub fn to_builder(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(&self.name)
                .description(&self.description)
                .dm_permission(self.dm_permission),
            |command, option| {
                command.add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        &option.name,
                        &option.description,
                    )
                    .required(option.required),
                )
            },
        )
    }
}

/// Validate a whole command set as it would be bulk-overwritten
pub fn validate_all(definitions: &[CommandDefinition]) -> Result<(), DefinitionError> {
    if definitions.len() > MAX_COMMANDS {
        return Err(DefinitionError::TooManyCommands(definitions.len()));
    }

    let mut names = HashSet::new();
    for definition in definitions {
        definition.validate()?;
        if !names.insert(definition.name.as_str()) {
            return Err(DefinitionError::DuplicateCommand(definition.name.clone()));
        }
    }
    Ok(())
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^[-_\p{{L}}\p{{N}}]{{1,{MAX_NAME_LEN}}}$")).expect("valid regex")
    })
}

fn validate_name(name: &str) -> Result<(), DefinitionError> {
    if !name_pattern().is_match(name) || name.chars().any(char::is_uppercase) {
        return Err(DefinitionError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn validate_description(owner: &str, description: &str) -> Result<(), DefinitionError> {
    let len = description.chars().count();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return Err(DefinitionError::InvalidDescription(owner.to_string()));
    }
    Ok(())
}
