//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Ledger rows reference catalog rows through foreign keys, so
//! create the loot item first.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let item = factory::loot_item::LootItemFactory::new(&db)
//!     .name("Golden Koi")
//!     .tier(5)
//!     .build()
//!     .await?;
//! factory::create_wallet(&db, "42", 100.0).await?;
//! factory::create_catch(&db, "42", item.id, 2).await?;
//! factory::create_favorite(&db, "42", item.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `loot_item` - Catalog rows
//! - `wallet` - Wallet rows
//! - `catch` - Catch count rows
//! - `favorite` - Favorite rows
//! - `helpers` - Unique ID generation

pub mod catch;
pub mod favorite;
pub mod helpers;
pub mod loot_item;
pub mod wallet;

pub use catch::create_catch;
pub use favorite::create_favorite;
pub use loot_item::create_loot_item;
pub use wallet::create_wallet;
