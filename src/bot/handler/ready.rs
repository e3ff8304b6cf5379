//! Ready event handler.
//!
//! Fired after every (re)connection to the gateway. Registers the global slash commands and
//! reloads the catalog cache so a reconnect picks up catalog rows added by migrations.

use serenity::all::{Command, Context, Ready};
use tracing::{error, info};

use crate::{bot::command, service::catalog::CatalogService, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => info!("Registered {} slash commands", commands.len()),
        Err(e) => error!("Failed to register slash commands: {:?}", e),
    }

    let catalog = CatalogService::new(&state.db, &state.catalog_cache);
    catalog.invalidate().await;
    match catalog.snapshot().await {
        Ok(snapshot) => info!(
            "Loaded catalog: {} tiered, {} bonus items",
            snapshot.tiered.len(),
            snapshot.bonus.len()
        ),
        Err(e) => error!("Failed to load catalog: {}", e),
    }
}
