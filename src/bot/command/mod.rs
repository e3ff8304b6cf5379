//! Slash command definitions and dispatch.
//!
//! Each command module exposes its `NAME`, a `register()` building the command definition and
//! a `run()` returning the reply text. Formatting lives in plain functions so it can be tested
//! without a Discord connection.

use serenity::all::{CommandInteraction, CreateCommand};

use crate::{
    error::{internal::InternalError, AppError},
    state::AppState,
};

pub mod favorite;
pub mod fish;
pub mod inventory;
pub mod options;
pub mod roll;
pub mod sell;

/// Discord rejects message content longer than this many characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Every command registered on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        roll::register(),
        fish::register(),
        sell::register(),
        favorite::register(),
        inventory::register_inventory(),
        inventory::register_balance(),
    ]
}

/// Runs the command named by the interaction.
///
/// # Returns
/// - `Ok(String)` - Reply content
/// - `Err(AppError)` - Command failed; convert with `user_message` before replying
pub async fn dispatch(state: &AppState, cmd: &CommandInteraction) -> Result<String, AppError> {
    let user_id = cmd.user.id.get();
    let options = cmd.data.options.as_slice();

    match cmd.data.name.as_str() {
        roll::NAME => roll::run(options),
        fish::NAME => fish::run(state, user_id, options).await,
        sell::NAME => sell::run(state, user_id, options).await,
        favorite::NAME => favorite::run(state, user_id, options).await,
        inventory::INVENTORY => inventory::run_inventory(state, user_id).await,
        inventory::BALANCE => inventory::run_balance(state, user_id).await,
        other => Err(InternalError::UnknownCommand(other.to_string()).into()),
    }
}

/// Cuts a reply at the last line break that fits within [`MESSAGE_LIMIT`].
pub fn fit_message(content: String) -> String {
    if content.chars().count() <= MESSAGE_LIMIT {
        return content;
    }

    const ELLIPSIS: &str = "\n…";
    let budget = MESSAGE_LIMIT - ELLIPSIS.chars().count();
    let cut: String = content.chars().take(budget).collect();
    let end = cut.rfind('\n').unwrap_or(cut.len());

    format!("{}{}", &cut[..end], ELLIPSIS)
}
