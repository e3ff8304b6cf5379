use super::*;

/// Tests overwriting the balance of an existing wallet.
///
/// Expected: Ok and the stored balance changes
#[tokio::test]
async fn updates_existing_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_wallet(db, "42", 100.0).await?;

    let repo = WalletRepository::new(db);
    repo.set_balance(42, 31.8).await?;

    let wallet = repo.find(42).await?.unwrap();
    assert_eq!(wallet.balance, 31.8);

    Ok(())
}

/// Tests that writing the balance of a missing wallet fails.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_without_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Wallet)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = WalletRepository::new(db);
    let result = repo.set_balance(42, 10.0).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
