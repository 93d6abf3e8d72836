use anyhow::Result;
use dotenvy::dotenv;
use log::info;

use hello_bot::commands::create_slash_commands;
use hello_bot::core::RegistrarConfig;
use hello_bot::registrar::{register, HttpRegistrar};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Fails before any network activity when a required variable is missing
    let config = RegistrarConfig::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let registrar = HttpRegistrar::new(&config.discord_token, config.application_id);

    // anyhow reports a failure on stderr and exits with status 1
    let count = register(&registrar, config.scope, &create_slash_commands()).await?;
    info!("✅ {count} command(s) registered for {}", config.scope);

    Ok(())
}
