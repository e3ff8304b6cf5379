use super::*;

/// Tests loading one pool of the catalog.
///
/// Verifies that only items of the requested source are returned, ordered by ID.
///
/// Expected: Ok with tiered items only, ascending IDs
#[tokio::test]
async fn returns_items_of_source_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootItem)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    LootItemFactory::new(db).id(3).tier(2).build().await?;
    LootItemFactory::new(db).id(1).build().await?;
    LootItemFactory::new(db).id(101).source("bonus").build().await?;

    let repo = LootItemRepository::new(db);
    let tiered = repo.get_by_source(CatalogSource::Tiered).await?;
    let bonus = repo.get_by_source(CatalogSource::Bonus).await?;

    let ids: Vec<i32> = tiered.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(tiered[1].tier, Tier::Uncommon);
    assert_eq!(bonus.len(), 1);
    assert_eq!(bonus[0].source, CatalogSource::Bonus);

    Ok(())
}

/// Tests that an invalid catalog row surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_invalid_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LootItem)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    LootItemFactory::new(db).tier(9).build().await?;

    let repo = LootItemRepository::new(db);
    let result = repo.get_by_source(CatalogSource::Tiered).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
