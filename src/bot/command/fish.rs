use std::fmt::Write;

use serenity::all::{CommandDataOption, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{fit_message, options},
    error::AppError,
    model::{
        ledger::CastOutcome,
        loot::{BaitGrade, DrawRequest, MAX_CAST_QUANTITY},
    },
    service::fishing::FishingService,
    state::AppState,
};

pub const NAME: &str = "fish";

pub fn register() -> CreateCommand {
    let mut bait = CreateCommandOption::new(CommandOptionType::Integer, "bait", "Bait grade")
        .required(true);
    for grade in BaitGrade::MIN..=BaitGrade::MAX {
        if let Ok(grade) = BaitGrade::new(grade as i64) {
            bait = bait.add_int_choice(
                format!("Grade {} ({} credits)", grade.value(), grade.price()),
                grade.value() as i32,
            );
        }
    }

    CreateCommand::new(NAME)
        .description("Buy bait and cast your line")
        .add_option(bait)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "quantity", "Number of casts")
                .required(true)
                .min_int_value(1)
                .max_int_value(MAX_CAST_QUANTITY as u64),
        )
}

pub async fn run(
    state: &AppState,
    user_id: u64,
    options: &[CommandDataOption],
) -> Result<String, AppError> {
    let grade = options::required_integer(NAME, options, "bait")?;
    let quantity = options::required_integer(NAME, options, "quantity")?;
    let request = DrawRequest::new(grade, quantity)?;

    let outcome = FishingService::new(state).cast(user_id, request).await?;

    Ok(format_cast(&request, &outcome))
}

/// Formats a settled cast: cost, caught items grouped by item, new balance.
pub fn format_cast(request: &DrawRequest, outcome: &CastOutcome) -> String {
    let mut reply = String::new();

    if outcome.draw.legendary_count > 0 {
        let _ = writeln!(
            reply,
            "🌟 **LEGENDARY CATCH!** ({}) 🌟",
            outcome.draw.legendary_count
        );
    }
    let _ = writeln!(
        reply,
        "🎣 You spent {:.2} credits on {} grade {} bait.",
        request.cost(),
        request.quantity,
        request.grade.value()
    );

    if outcome.plan.lines.is_empty() {
        reply.push_str("Nothing bit this time.\n");
    } else {
        for line in &outcome.plan.lines {
            let _ = writeln!(
                reply,
                "- {}x {} ({})",
                line.delta, line.item.name, line.item.tier
            );
        }
    }
    let _ = write!(reply, "Balance: {:.2}", outcome.plan.balance_after);

    fit_message(reply)
}
