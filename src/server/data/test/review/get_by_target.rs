use super::*;

/// Tests that review listings are newest first.
///
/// Expected: Reviews ordered by creation time descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;
    let now = Utc::now();

    let old = factory::review::ReviewFactory::for_drink(db, user.id, drink.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let new = factory::review::ReviewFactory::for_drink(db, user.id, drink.id)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::review::ReviewFactory::for_drink(db, user.id, drink.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![new.id, middle.id, old.id]);

    Ok(())
}

/// Tests filtering reviews by target kind and id.
///
/// Expected: Drink and restaurant listings contain only their own kind
#[tokio::test]
async fn filters_by_target() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;
    let other_drink = factory::create_drink(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let other_restaurant = factory::create_restaurant(db).await?;

    let drink_review = factory::create_drink_review(db, user.id, drink.id).await?;
    factory::create_drink_review(db, user.id, other_drink.id).await?;
    let restaurant_review = factory::create_restaurant_review(db, user.id, restaurant.id).await?;
    factory::create_restaurant_review(db, user.id, other_restaurant.id).await?;

    let repo = ReviewRepository::new(db);

    let by_drink = repo.get_by_drink(Some(drink.id)).await?;
    assert_eq!(by_drink.len(), 1);
    assert_eq!(by_drink[0].id, drink_review.id);

    let all_drinks = repo.get_by_drink(None).await?;
    assert_eq!(all_drinks.len(), 2);
    assert!(all_drinks.iter().all(|r| r.drink_name.is_some()));

    let by_restaurant = repo.get_by_restaurant(Some(restaurant.id)).await?;
    assert_eq!(by_restaurant.len(), 1);
    assert_eq!(by_restaurant[0].id, restaurant_review.id);
    assert_eq!(
        by_restaurant[0].restaurant_name.as_deref(),
        Some(restaurant.name.as_str())
    );

    let all_restaurants = repo.get_by_restaurant(None).await?;
    assert_eq!(all_restaurants.len(), 2);

    Ok(())
}

/// Tests listing reviews by several authors.
///
/// Expected: Only reviews by the given authors; empty input yields nothing
#[tokio::test]
async fn filters_by_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;

    factory::create_drink_review(db, a.id, drink.id).await?;
    factory::create_drink_review(db, b.id, drink.id).await?;
    factory::create_drink_review(db, c.id, drink.id).await?;

    let repo = ReviewRepository::new(db);

    let reviews = repo.get_by_authors(&[a.id, b.id]).await?;
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.author.id != c.id));

    assert!(repo.get_by_authors(&[]).await?.is_empty());
    assert_eq!(repo.get_by_author(c.id).await?.len(), 1);

    Ok(())
}
