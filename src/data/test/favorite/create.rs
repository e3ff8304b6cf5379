use super::*;

/// Tests that favoriting twice keeps a single row.
///
/// Expected: true then false, one favorite listed
#[tokio::test]
async fn creates_favorite_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let item = factory::create_loot_item(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.create(42, item.id).await?);
    assert!(!repo.create(42, item.id).await?);

    assert!(repo.exists(42, item.id).await?);
    assert!(!repo.exists(7, item.id).await?);

    let favorites = repo.get_by_user(42).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, item.id);

    let ids = repo.item_ids(42).await?;
    assert!(ids.contains(&item.id));

    Ok(())
}
