//! Discord bot integration.
//!
//! The bot registers the dice and fishing slash commands as global commands when it connects
//! and answers every command interaction with a single reply. Command modules only parse
//! options, call into the engines or the fishing service and format the result; failures are
//! mapped to replies through `AppError::user_message`.
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, so only `GUILDS` is requested. No privileged intents
//! are needed.

pub mod command;
pub mod handler;
pub mod start;
