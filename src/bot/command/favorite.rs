use std::fmt::Write;

use serenity::all::{CommandDataOption, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{fit_message, options},
    error::{internal::InternalError, AppError},
    model::loot::LootItem,
    service::fishing::FishingService,
    state::AppState,
};

pub const NAME: &str = "favorite";

fn item_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "item", "Item name or ID").required(true)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Protect items from bulk sales")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add a favorite")
                .add_sub_option(item_option()),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "remove", "Remove a favorite")
                .add_sub_option(item_option()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List your favorites",
        ))
}

pub async fn run(
    state: &AppState,
    user_id: u64,
    options: &[CommandDataOption],
) -> Result<String, AppError> {
    let service = FishingService::new(state);

    match options::subcommand(options) {
        Some(("add", params)) => {
            let query = options::required_string(NAME, params, "item")?;
            let (item, created) = service.add_favorite(user_id, query).await?;
            Ok(if created {
                format!("⭐ {} is now a favorite.", item.name)
            } else {
                format!("⭐ {} is already a favorite.", item.name)
            })
        }
        Some(("remove", params)) => {
            let query = options::required_string(NAME, params, "item")?;
            let item = service.remove_favorite(user_id, query).await?;
            Ok(format!("{} is no longer a favorite.", item.name))
        }
        Some(("list", _)) => Ok(format_favorites(&service.favorites(user_id).await?)),
        Some((other, _)) => Err(InternalError::UnknownCommand(format!("{} {}", NAME, other)).into()),
        None => Err(InternalError::MissingCommandOption {
            command: NAME.to_string(),
            option: "subcommand".to_string(),
        }
        .into()),
    }
}

pub fn format_favorites(items: &[LootItem]) -> String {
    if items.is_empty() {
        return "You have no favorites.".to_string();
    }

    let mut reply = String::from("⭐ Favorites:");
    for item in items {
        let _ = write!(reply, "\n- {} ({})", item.name, item.tier);
    }

    fit_message(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::loot::{CatalogSource, Tier};

    #[test]
    fn formats_favorites() {
        assert_eq!(format_favorites(&[]), "You have no favorites.");

        let items = [LootItem {
            id: 8,
            name: "Salmon".to_string(),
            tier: Tier::Rare,
            source: CatalogSource::Tiered,
        }];
        assert_eq!(format_favorites(&items), "⭐ Favorites:\n- Salmon (Rare)");
    }
}
