use serenity::all::{CommandDataOption, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::options,
    error::{internal::InternalError, AppError},
    model::{
        ledger::{SaleSpec, SettlementPlan, MAX_SALE_QUANTITY},
        loot::Tier,
    },
    service::fishing::FishingService,
    state::AppState,
};

pub const NAME: &str = "sell";

pub fn register() -> CreateCommand {
    let mut tier = CreateCommandOption::new(CommandOptionType::Integer, "tier", "Rarity tier")
        .required(true);
    for t in Tier::ALL {
        tier = tier.add_int_choice(t.name(), t.value());
    }

    CreateCommand::new(NAME)
        .description("Sell caught items for credits; favorites and your last unit are kept")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "dupes",
            "Sell every duplicate",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "tier",
                "Sell every duplicate of one tier",
            )
            .add_sub_option(tier),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "item", "Sell one item")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "item",
                        "Item name or ID",
                    )
                    .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        "quantity",
                        "Units to sell (default 1)",
                    )
                    .min_int_value(1)
                    .max_int_value(MAX_SALE_QUANTITY as u64),
                ),
        )
}

pub async fn run(
    state: &AppState,
    user_id: u64,
    options: &[CommandDataOption],
) -> Result<String, AppError> {
    let service = FishingService::new(state);

    let spec = match options::subcommand(options) {
        Some(("dupes", _)) => SaleSpec::Dupes,
        Some(("tier", params)) => SaleSpec::tier(options::required_integer(NAME, params, "tier")?)?,
        Some(("item", params)) => {
            let query = options::required_string(NAME, params, "item")?;
            let quantity = options::integer(params, "quantity").unwrap_or(1);
            let item = service.resolve_item(query).await?;
            SaleSpec::item(item.id, quantity)?
        }
        Some((other, _)) => {
            return Err(InternalError::UnknownCommand(format!("{} {}", NAME, other)).into())
        }
        None => {
            return Err(InternalError::MissingCommandOption {
                command: NAME.to_string(),
                option: "subcommand".to_string(),
            }
            .into())
        }
    };

    let plan = service.sell(user_id, spec).await?;

    Ok(format_sale(&plan))
}

pub fn format_sale(plan: &SettlementPlan) -> String {
    format!(
        "💰 Sold {} item(s) for {:.2} credits.\nBalance: {:.2}",
        plan.units(),
        plan.credits_delta(),
        plan.balance_after
    )
}
