//! Interaction handler for slash commands.
//!
//! Runs the command and sends exactly one reply. Successful results are posted to the
//! channel; errors are converted with `AppError::user_message` and sent ephemerally so only
//! the invoking user sees them.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};
use tracing::{debug, error};

use crate::{bot::command, state::AppState};

/// Handles an incoming interaction.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for sending the reply
/// - `interaction` - The interaction; anything other than a slash command is ignored
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(cmd) = interaction else {
        return;
    };

    debug!("/{} invoked by {}", cmd.data.name, cmd.user.id);

    let message = match command::dispatch(state, &cmd).await {
        Ok(content) => CreateInteractionResponseMessage::new().content(content),
        Err(e) => CreateInteractionResponseMessage::new()
            .content(e.user_message())
            .ephemeral(true),
    };

    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        error!("Failed to reply to /{}: {:?}", cmd.data.name, e);
    }
}
