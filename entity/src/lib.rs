//! SeaORM entity models for the bot's persisted state.
//!
//! The catalog (`loot_item`) is seeded by migrations and read-only at runtime. Ledger tables
//! (`wallet`, `catch`, `favorite`) are keyed by the Discord user ID stored as a string.

pub mod prelude;

pub mod catch;
pub mod favorite;
pub mod loot_item;
pub mod wallet;
