// Core layer - configuration and Discord limits
pub mod core;

// Transport-independent interaction model
pub mod interaction;

// Application layer
pub mod commands;
pub mod registrar;
pub mod responder;

// Re-export core config
pub use core::{BotConfig, RegistrarConfig, RegistrationScope};

pub use interaction::{Interaction, InteractionKind, InvokingUser};
pub use registrar::{register, CommandRegistrar, HttpRegistrar, RegistrationError};
pub use responder::{Handler, HttpReplier, SessionState};
