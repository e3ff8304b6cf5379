//! Error types and user-facing reply mapping.
//!
//! `AppError` is the top-level error type that wraps the domain errors raised by the dice and
//! loot engines together with infrastructure failures. Command handlers convert it into a reply
//! with [`AppError::user_message`]: user-input errors are shown verbatim, everything else is
//! logged and replaced by a generic message.

pub mod config;
pub mod dice;
pub mod economy;
pub mod internal;

use thiserror::Error;

use crate::error::{
    config::ConfigError, dice::DiceError, economy::EconomyError, internal::InternalError,
};

/// Generic reply for failures the user cannot fix.
const GENERIC_FAILURE: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use `#[from]`
/// for automatic conversion so services can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed or non-evaluable dice expression.
    ///
    /// Reported verbatim to the user and never retried.
    #[error(transparent)]
    DiceErr(#[from] DiceError),

    /// Fishing and economy rule violation (insufficient funds, nothing to sell, ...).
    ///
    /// Reported verbatim to the user.
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Unexpected data shape read back from the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Raised inside a settlement, the surrounding transaction is rolled back.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text sent back to the invoking user.
    ///
    /// Dice and economy errors describe a problem with the user's input and are returned as-is.
    /// Every other variant is logged at error level and replaced with a generic message to avoid
    /// leaking implementation details into the channel.
    ///
    /// # Returns
    /// - `String` - Message suitable for an ephemeral interaction reply
    pub fn user_message(&self) -> String {
        match self {
            Self::DiceErr(err) => err.to_string(),
            Self::EconomyErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE.to_string()
            }
        }
    }
}
