use super::*;

/// Tests that the first catch of an item inserts a row.
///
/// Expected: Ok with count equal to the delta
#[tokio::test]
async fn inserts_absent_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let item = factory::create_loot_item(db).await?;

    let repo = CatchRepository::new(db);
    let catch = repo.add_count(42, item.id, 2).await?;

    assert_eq!(catch.user_id, 42);
    assert_eq!(catch.item_id, item.id);
    assert_eq!(catch.count, 2);

    Ok(())
}

/// Tests that repeated catches add to the existing row instead of inserting another.
///
/// Expected: Ok with summed count and a single row
#[tokio::test]
async fn adds_to_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let item = factory::create_loot_item(db).await?;
    factory::create_catch(db, "42", item.id, 3).await?;

    let repo = CatchRepository::new(db);
    let catch = repo.add_count(42, item.id, 2).await?;
    assert_eq!(catch.count, 5);

    let catch = repo.add_count(42, item.id, -4).await?;
    assert_eq!(catch.count, 1);

    let rows = entity::prelude::Catch::find()
        .filter(entity::catch::Column::UserId.eq("42"))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that counts never go negative.
///
/// Expected: Err for overdraw and for selling an item never held; stored count unchanged
#[tokio::test]
async fn rejects_negative_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let held = factory::create_loot_item(db).await?;
    let never_held = factory::create_loot_item(db).await?;
    factory::create_catch(db, "42", held.id, 1).await?;

    let repo = CatchRepository::new(db);

    let result = repo.add_count(42, held.id, -2).await;
    assert!(matches!(result, Err(AppError::DbErr(DbErr::Custom(_)))));

    let result = repo.add_count(42, never_held.id, -1).await;
    assert!(matches!(
        result,
        Err(AppError::DbErr(DbErr::RecordNotFound(_)))
    ));

    assert_eq!(repo.find(42, held.id).await?.map(|c| c.count), Some(1));

    Ok(())
}
