use super::*;

/// Tests creating a wallet on first use.
///
/// Verifies that a missing wallet is created with the starting balance.
///
/// Expected: Ok with new wallet holding the starting balance
#[tokio::test]
async fn creates_wallet_with_starting_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = WalletRepository::new(db);
    assert!(repo.find(42).await?.is_none());

    let wallet = repo.get_or_create(42, 100.0).await?;

    assert_eq!(wallet.user_id, 42);
    assert_eq!(wallet.balance, 100.0);
    assert!(entity::prelude::Wallet::find_by_id("42".to_string())
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that an existing wallet is returned untouched.
///
/// Expected: Ok with the stored balance, not the starting balance
#[tokio::test]
async fn returns_existing_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_wallet(db, "42", 12.5).await?;

    let repo = WalletRepository::new(db);
    let wallet = repo.get_or_create(42, 100.0).await?;

    assert_eq!(wallet.balance, 12.5);

    Ok(())
}

/// Tests two first uses of the same wallet running concurrently.
///
/// Verifies that when both calls miss the wallet, the losing insert is ignored instead of
/// failing on the primary key.
///
/// Expected: both Ok with the starting balance and a single wallet row
#[tokio::test]
async fn concurrent_first_use_creates_one_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = WalletRepository::new(db);
    let (first, second) = tokio::join!(repo.get_or_create(43, 100.0), repo.get_or_create(43, 100.0));

    assert_eq!(first?.balance, 100.0);
    assert_eq!(second?.balance, 100.0);
    assert_eq!(entity::prelude::Wallet::find().all(db).await?.len(), 1);

    Ok(())
}
