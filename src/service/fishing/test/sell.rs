use super::*;

/// Tests selling every duplicate.
///
/// Verifies that each item keeps one unit and favorites are left alone.
///
/// Expected: Ok, counts reduced to 1, favorite untouched, wallet credited
#[tokio::test]
async fn sells_dupes_keeping_one_and_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    seed_catalog(db).await?;
    factory::create_wallet(db, "42", 0.0).await?;
    factory::create_catch(db, "42", 1, 3).await?;
    factory::create_catch(db, "42", 5, 2).await?;
    factory::create_catch(db, "42", 13, 2).await?;
    factory::create_favorite(db, "42", 13).await?;
    let state = state(db);

    let service = FishingService::new(&state);
    let plan = service.sell(42, SaleSpec::Dupes).await?;

    assert_eq!(plan.units(), 3);
    assert_eq!(plan.balance_after, 30.6);

    let catches = CatchRepository::new(db);
    assert_eq!(catches.find(42, 1).await?.map(|c| c.count), Some(1));
    assert_eq!(catches.find(42, 5).await?.map(|c| c.count), Some(1));
    assert_eq!(catches.find(42, 13).await?.map(|c| c.count), Some(2));
    assert_eq!(WalletRepository::new(db).find(42).await?.unwrap().balance, 30.6);

    Ok(())
}

/// Tests selling one tier and an explicit item.
///
/// Expected: Ok for each sale with the keep-one cap applied
#[tokio::test]
async fn sells_tier_and_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    seed_catalog(db).await?;
    factory::create_catch(db, "42", 1, 3).await?;
    factory::create_catch(db, "42", 8, 4).await?;
    let state = state(db);

    let service = FishingService::new(&state);

    let plan = service.sell(42, SaleSpec::Tier(Tier::Rare)).await?;
    assert_eq!(plan.balance_before, 100.0);
    assert_eq!(plan.balance_after, 281.8);

    let item = service.resolve_item("1").await?;
    let plan = service
        .sell(
            42,
            SaleSpec::Item {
                item_id: item.id,
                quantity: 10,
            },
        )
        .await?;
    assert_eq!(plan.units(), 2);
    assert_eq!(plan.balance_after, 301.8);

    let catches = CatchRepository::new(db);
    assert_eq!(catches.find(42, 1).await?.map(|c| c.count), Some(1));
    assert_eq!(catches.find(42, 8).await?.map(|c| c.count), Some(1));

    Ok(())
}

/// Tests that a sale with nothing eligible changes nothing.
///
/// Expected: Err(NothingToSell), balance unchanged
#[tokio::test]
async fn nothing_to_sell_leaves_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    seed_catalog(db).await?;
    factory::create_wallet(db, "42", 5.0).await?;
    factory::create_catch(db, "42", 1, 1).await?;
    let state = state(db);

    let service = FishingService::new(&state);
    let result = service.sell(42, SaleSpec::Dupes).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::NothingToSell))
    ));
    assert_eq!(WalletRepository::new(db).find(42).await?.unwrap().balance, 5.0);

    Ok(())
}
