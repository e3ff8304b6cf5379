use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Connects the bot to Discord and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(())` - The gateway connection closed cleanly
/// - `Err(AppError::DiscordErr)` - Client creation or the gateway connection failed
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
