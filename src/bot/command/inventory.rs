use std::fmt::Write;

use serenity::all::CreateCommand;

use crate::{
    bot::command::fit_message,
    error::AppError,
    model::ledger::{InventoryEntry, Wallet},
    service::fishing::FishingService,
    state::AppState,
};

pub const INVENTORY: &str = "inventory";
pub const BALANCE: &str = "balance";

pub fn register_inventory() -> CreateCommand {
    CreateCommand::new(INVENTORY).description("Show the items you have caught")
}

pub fn register_balance() -> CreateCommand {
    CreateCommand::new(BALANCE).description("Show your credit balance")
}

pub async fn run_inventory(state: &AppState, user_id: u64) -> Result<String, AppError> {
    let service = FishingService::new(state);
    let wallet = service.balance(user_id).await?;
    let entries = service.inventory(user_id).await?;

    Ok(format_inventory(&entries, &wallet))
}

pub async fn run_balance(state: &AppState, user_id: u64) -> Result<String, AppError> {
    let wallet = FishingService::new(state).balance(user_id).await?;

    Ok(format!("💰 You have {:.2} credits.", wallet.balance))
}

/// Lists held items rarest first, marking favorites with a star.
pub fn format_inventory(entries: &[InventoryEntry], wallet: &Wallet) -> String {
    if entries.is_empty() {
        return format!(
            "Your inventory is empty.\nBalance: {:.2}",
            wallet.balance
        );
    }

    let mut reply = format!("🎒 Inventory (balance {:.2}):", wallet.balance);
    for entry in entries {
        let marker = if entry.favorite { "⭐ " } else { "" };
        let _ = write!(
            reply,
            "\n- {}{}x {} ({})",
            marker, entry.count, entry.item.name, entry.item.tier
        );
    }

    fit_message(reply)
}
