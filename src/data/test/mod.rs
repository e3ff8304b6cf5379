mod catch;
mod favorite;
mod loot_item;
mod wallet;
