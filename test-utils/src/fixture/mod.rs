//! Test fixtures providing entity models without database insertion.
//!
//! Fixtures back the factory defaults and let unit tests exercise conversions such as
//! `LootItem::from_entity` without a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let item = fixture::loot_item::entity();
//! let legendary = fixture::loot_item::entity_builder().tier(5).build();
//! ```

pub mod loot_item;

pub use loot_item::{entity as loot_item_entity, entity_builder as loot_item_entity_builder};
