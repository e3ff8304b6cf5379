pub use super::catch::Entity as Catch;
pub use super::favorite::Entity as Favorite;
pub use super::loot_item::Entity as LootItem;
pub use super::wallet::Entity as Wallet;
