use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord user IDs are persisted as strings; a row that does not hold a valid u64
    /// means the ledger was written by something other than this bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A catalog row carries a tier outside `1..=5`.
    #[error("Catalog item {item_id} has invalid tier {tier}")]
    InvalidTier {
        /// ID of the offending catalog item
        item_id: i32,
        /// The stored tier value
        tier: i32,
    },

    /// A catalog row carries an unknown pool name.
    #[error("Catalog item {item_id} has unknown source '{source_name}'")]
    InvalidSource {
        /// ID of the offending catalog item
        item_id: i32,
        /// The stored source value
        source_name: String,
    },

    /// A ledger row references a catalog item that does not exist.
    #[error("Ledger row references missing catalog item {item_id}")]
    MissingCatalogItem {
        /// ID referenced by the ledger row
        item_id: i32,
    },

    /// A slash command arrived without an option its definition marks as required.
    #[error("Command /{command} is missing option '{option}'")]
    MissingCommandOption {
        /// Name of the invoked command
        command: String,
        /// Name of the missing option
        option: String,
    },

    /// An interaction named a command this bot never registered.
    #[error("Unknown command /{0}")]
    UnknownCommand(String),
}
