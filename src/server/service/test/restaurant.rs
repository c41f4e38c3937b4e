use super::*;
use crate::server::{model::restaurant::NearbyParam, service::restaurant::RestaurantService};

/// Tests the restaurant page.
///
/// Verifies drinks, reviews and the average rating rounded to one decimal.
///
/// Expected: Ok with average 4.3 over three reviews
#[tokio::test]
async fn builds_restaurant_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let spritz = factory::drink::DrinkFactory::new(db).name("Spritz").build().await?;
    let restaurant = factory::restaurant::RestaurantFactory::new(db)
        .name("Al Mercà")
        .serves(spritz.id)
        .build()
        .await?;
    for rating in [5, 4, 4] {
        factory::review::ReviewFactory::for_restaurant(db, user.id, restaurant.id)
            .rating(rating)
            .build()
            .await?;
    }

    let page = RestaurantService::new(db).get_by_name("Al Mercà").await?;

    assert_eq!(page.restaurant.id, restaurant.id);
    assert_eq!(page.drinks.len(), 1);
    assert_eq!(page.drinks[0].name, "Spritz");
    assert_eq!(page.reviews.len(), 3);
    assert_eq!(page.total_reviews, 3);
    assert_eq!(page.average_rating, Some(4.3));

    Ok(())
}

/// Tests a restaurant page with no reviews.
///
/// Expected: No average and zero reviews
#[tokio::test]
async fn page_without_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let page = RestaurantService::new(db)
        .get_by_name(&restaurant.name)
        .await?;

    assert_eq!(page.average_rating, None);
    assert_eq!(page.total_reviews, 0);
    assert!(page.reviews.is_empty());

    Ok(())
}

/// Tests an unknown restaurant name.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_name_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantService::new(db).get_by_name("Nowhere").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests proximity search.
///
/// Verifies that only restaurants within the radius are returned, nearest first.
///
/// Expected: The two central Paris restaurants, not the one in London
#[tokio::test]
async fn finds_nearby_sorted_by_distance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let louvre = factory::restaurant::RestaurantFactory::new(db)
        .location(2.3376, 48.8606)
        .build()
        .await?;
    let notre_dame = factory::restaurant::RestaurantFactory::new(db)
        .location(2.3499, 48.8530)
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .location(-0.1276, 51.5072)
        .build()
        .await?;

    let param = NearbyParam::new(2.3522, 48.8566, Some(5.0))?;
    let nearby = RestaurantService::new(db).nearby(param).await?;

    let ids: Vec<i32> = nearby.iter().map(|r| r.restaurant.id).collect();
    assert_eq!(ids, vec![notre_dame.id, louvre.id]);
    assert!(nearby.iter().all(|r| r.distance_km <= 5.0));

    Ok(())
}
