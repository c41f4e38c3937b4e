use super::*;

/// Tests the average rating of a reviewed restaurant.
///
/// Expected: Mean of the ratings and the review count
#[tokio::test]
async fn averages_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;

    for rating in [5, 4, 4] {
        factory::review::ReviewFactory::for_restaurant(db, user.id, restaurant.id)
            .rating(rating)
            .build()
            .await?;
    }
    factory::review::ReviewFactory::for_restaurant(db, user.id, other.id)
        .rating(1)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let (average, total) = repo.restaurant_rating(restaurant.id).await?;

    assert_eq!(total, 3);
    let average = average.unwrap();
    assert!((average - 13.0 / 3.0).abs() < 1e-9);

    Ok(())
}

/// Tests a restaurant with no reviews.
///
/// Expected: No average and a zero count
#[tokio::test]
async fn none_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.restaurant_rating(restaurant.id).await?, (None, 0));

    Ok(())
}
