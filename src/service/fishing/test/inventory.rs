use super::*;

/// Tests inventory ordering and favorite flags.
///
/// Expected: rarest tier first, ties broken by ID, favorites flagged
#[tokio::test]
async fn orders_by_tier_then_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    seed_catalog(db).await?;
    factory::create_catch(db, "42", 2, 1).await?;
    factory::create_catch(db, "42", 1, 4).await?;
    factory::create_catch(db, "42", 13, 1).await?;
    factory::create_catch(db, "42", 8, 2).await?;
    factory::create_favorite(db, "42", 8).await?;
    let state = state(db);

    let service = FishingService::new(&state);
    let inventory = service.inventory(42).await?;

    let rows: Vec<(i32, i32, bool)> = inventory
        .iter()
        .map(|entry| (entry.item.id, entry.count, entry.favorite))
        .collect();
    assert_eq!(
        rows,
        vec![(13, 1, false), (8, 2, true), (1, 4, false), (2, 1, false)]
    );

    Ok(())
}

/// Tests that checking the balance creates a wallet with the starting balance.
///
/// Expected: Ok with 100 credits, stored afterwards
#[tokio::test]
async fn balance_creates_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    let state = state(db);

    let service = FishingService::new(&state);
    let wallet = service.balance(42).await?;

    assert_eq!(wallet.balance, 100.0);
    assert!(WalletRepository::new(db).find(42).await?.is_some());

    Ok(())
}

/// Tests two balance checks racing on a user without a wallet.
///
/// Expected: both Ok with the starting balance
#[tokio::test]
async fn concurrent_balance_checks_share_one_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;
    let state = state(db);

    let service = FishingService::new(&state);
    let (first, second) = tokio::join!(service.balance(43), service.balance(43));

    assert_eq!(first?.balance, 100.0);
    assert_eq!(second?.balance, 100.0);

    Ok(())
}
