use super::*;

/// Tests case-insensitive restaurant search.
///
/// Expected: Matching restaurants ordered by name
#[tokio::test]
async fn searches_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("The Tipsy Cow")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Tipsy Tavern")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Sober Cafe")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let names: Vec<String> = repo
        .search("TIPSY")
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, vec!["The Tipsy Cow", "Tipsy Tavern"]);

    Ok(())
}

/// Tests exact name lookup.
///
/// Expected: Some for the exact name, None for a different case
#[tokio::test]
async fn finds_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::restaurant::RestaurantFactory::new(db)
        .name("Harry's Bar")
        .location(12.3375, 45.4331)
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let found = repo.find_by_name("Harry's Bar").await?.unwrap();
    assert_eq!(found.id, restaurant.id);
    assert_eq!(found.longitude, 12.3375);
    assert_eq!(found.latitude, 45.4331);

    assert!(repo.find_by_name("harry's bar").await?.is_none());

    Ok(())
}

/// Tests search over names with non-ASCII capitals.
///
/// Expected: A lowercase accented query matches an uppercase accented name
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("CAFÉ ÉCLAIR")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Cafe Sans Accent")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let names: Vec<String> = repo
        .search("café")
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, vec!["CAFÉ ÉCLAIR"]);

    Ok(())
}
