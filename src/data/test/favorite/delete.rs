use super::*;

/// Tests removing a favorite.
///
/// Expected: true when a row was removed, false when there was nothing to remove
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let item = factory::create_loot_item(db).await?;
    factory::create_favorite(db, "42", item.id).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.delete(42, item.id).await?);
    assert!(!repo.delete(42, item.id).await?);
    assert!(repo.item_ids(42).await?.is_empty());

    Ok(())
}
