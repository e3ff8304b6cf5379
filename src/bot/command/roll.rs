use std::fmt::Write;

use serenity::all::{CommandDataOption, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{fit_message, options, MESSAGE_LIMIT},
    engine::dice,
    error::AppError,
    model::dice::RollOutcome,
    util::number::format_number,
};

pub const NAME: &str = "roll";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Roll dice, e.g. 2d20+3 or 4d6*(2-1)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "expression",
                "Dice expression in NdM form with an optional arithmetic suffix",
            )
            .required(true),
        )
}

pub fn run(options: &[CommandDataOption]) -> Result<String, AppError> {
    let expression = options::required_string(NAME, options, "expression")?;

    let outcome = dice::evaluate(expression, &mut rand::rng())?;

    Ok(format_roll(&outcome))
}

/// Formats a roll as the expression, the raw faces, the per-die results and their total.
///
/// Per-die lists are dropped when they would not fit in one message.
pub fn format_roll(outcome: &RollOutcome) -> String {
    let mut reply = format!("🎲 `{}`", outcome.spec);

    if outcome.spec.tokens.is_empty() {
        let _ = write!(reply, "\nRolls: {}", join(outcome.rolls.iter().map(|r| r.to_string())));
    } else {
        let _ = write!(
            reply,
            "\nRolls: {}\nResults: {}",
            join(outcome.rolls.iter().map(|r| r.to_string())),
            join(outcome.results.iter().map(|r| format_number(*r)))
        );
    }
    let total = format!("\nTotal: **{}**", format_number(outcome.total()));

    if reply.chars().count() + total.chars().count() > MESSAGE_LIMIT {
        return fit_message(format!(
            "🎲 `{}`\n{} dice rolled{}",
            outcome.spec,
            outcome.rolls.len(),
            total
        ));
    }

    reply + &total
}

fn join(values: impl Iterator<Item = String>) -> String {
    values.collect::<Vec<_>>().join(", ")
}
