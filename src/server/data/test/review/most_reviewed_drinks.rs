use super::*;

/// Tests ranking drinks by review count.
///
/// Verifies that a drink with three reviews ranks above a drink with one, and that
/// restaurant reviews are not counted.
///
/// Expected: `[(D, 3), (E, 1)]`
#[tokio::test]
async fn ranks_by_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let d = factory::create_drink(db).await?;
    let e = factory::create_drink(db).await?;
    let restaurant = factory::create_restaurant(db).await?;

    factory::create_drink_review(db, user.id, e.id).await?;
    factory::helpers::create_drink_reviews(db, user.id, d.id, 3).await?;
    factory::create_restaurant_review(db, user.id, restaurant.id).await?;

    let repo = ReviewRepository::new(db);
    let ranked = repo.most_reviewed_drinks(5).await?;

    assert_eq!(ranked, vec![(d.id, 3), (e.id, 1)]);

    Ok(())
}

/// Tests that the ranking honours the limit.
///
/// Expected: Five entries out of six reviewed drinks
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..6 {
        let drink = factory::create_drink(db).await?;
        factory::create_drink_review(db, user.id, drink.id).await?;
    }

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.most_reviewed_drinks(5).await?.len(), 5);

    Ok(())
}
