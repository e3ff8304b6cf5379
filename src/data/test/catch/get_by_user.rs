use super::*;
use crate::model::loot::Tier;
use test_utils::factory::loot_item::LootItemFactory;

/// Tests listing a user's held items joined with the catalog.
///
/// Verifies that other users' rows and zero counts are excluded.
///
/// Expected: Ok with the user's non-zero rows ordered by item ID
#[tokio::test]
async fn returns_non_zero_counts_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = &test.db;

    let koi = LootItemFactory::new(db).id(14).tier(5).build().await?;
    let minnow = LootItemFactory::new(db).id(1).build().await?;
    let perch = LootItemFactory::new(db).id(2).build().await?;

    factory::create_catch(db, "42", koi.id, 1).await?;
    factory::create_catch(db, "42", minnow.id, 4).await?;
    factory::create_catch(db, "42", perch.id, 0).await?;
    factory::create_catch(db, "7", perch.id, 9).await?;

    let repo = CatchRepository::new(db);
    let rows = repo.get_by_user(42).await?;

    let ids: Vec<(i32, i32)> = rows
        .iter()
        .map(|(catch, item)| (item.id, catch.count))
        .collect();
    assert_eq!(ids, vec![(1, 4), (14, 1)]);
    assert_eq!(rows[1].1.tier, Tier::Legendary);

    Ok(())
}
