//! Helpers for reading slash command options.

use serenity::all::{CommandDataOption, CommandDataOptionValue};

use crate::error::{internal::InternalError, AppError};

/// Returns the invoked subcommand and its options.
pub fn subcommand(options: &[CommandDataOption]) -> Option<(&str, &[CommandDataOption])> {
    let option = options.first()?;
    match &option.value {
        CommandDataOptionValue::SubCommand(params) => {
            Some((option.name.as_str(), params.as_slice()))
        }
        _ => None,
    }
}

pub fn string<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

pub fn integer(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_i64())
}

/// Reads a required string option.
///
/// # Returns
/// - `Ok(&str)` - Option value
/// - `Err(AppError::InternalErr)` - Discord delivered the command without it
pub fn required_string<'a>(
    command: &str,
    options: &'a [CommandDataOption],
    name: &str,
) -> Result<&'a str, AppError> {
    string(options, name).ok_or_else(|| missing(command, name))
}

/// Reads a required integer option.
pub fn required_integer(
    command: &str,
    options: &[CommandDataOption],
    name: &str,
) -> Result<i64, AppError> {
    integer(options, name).ok_or_else(|| missing(command, name))
}

fn missing(command: &str, option: &str) -> AppError {
    InternalError::MissingCommandOption {
        command: command.to_string(),
        option: option.to_string(),
    }
    .into()
}
