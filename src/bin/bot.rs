use anyhow::Result;
use dotenvy::dotenv;
use log::info;

use hello_bot::commands::create_handler;
use hello_bot::core::BotConfig;
use hello_bot::responder;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Fails before any network activity when DISCORD_TOKEN is missing
    let config = BotConfig::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting hello bot...");

    responder::run(&config, create_handler()).await
}
