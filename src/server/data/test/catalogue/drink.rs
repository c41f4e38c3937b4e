use super::*;

/// Tests searching drinks by name or category.
///
/// Expected: Drinks whose name or category contains the query, ordered by name
#[tokio::test]
async fn searches_name_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drink::DrinkFactory::new(db)
        .name("Mojito")
        .category("Cocktail")
        .ingredients(&["rum", "mint", "lime"])
        .build()
        .await?;
    factory::drink::DrinkFactory::new(db)
        .name("Cocktail Sauce")
        .category("Condiment")
        .build()
        .await?;
    factory::drink::DrinkFactory::new(db)
        .name("Pilsner")
        .category("Beer")
        .build()
        .await?;

    let repo = DrinkRepository::new(db);
    let drinks = repo.search("cocktail").await?;

    let names: Vec<&str> = drinks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Cocktail Sauce", "Mojito"]);

    let mojito = &drinks[1];
    assert_eq!(mojito.ingredients, vec!["rum", "mint", "lime"]);

    Ok(())
}

/// Tests that `%` in a drink query does not match everything.
///
/// Expected: Empty result
#[tokio::test]
async fn percent_matches_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_drink(db).await?;

    let repo = DrinkRepository::new(db);

    assert!(repo.search("%").await?.is_empty());

    Ok(())
}

/// Tests resolving drink names to ids and back.
///
/// Expected: Known names map to ids; unknown names are absent
#[tokio::test]
async fn maps_names_and_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let negroni = factory::drink::DrinkFactory::new(db).name("Negroni").build().await?;

    let repo = DrinkRepository::new(db);

    let ids = repo
        .ids_by_names(&["Negroni".to_string(), "Unknown".to_string()])
        .await?;
    assert_eq!(ids.get("Negroni"), Some(&negroni.id));
    assert!(!ids.contains_key("Unknown"));

    let names = repo.names_by_ids(&[negroni.id]).await?;
    assert_eq!(names.get(&negroni.id).map(String::as_str), Some("Negroni"));

    Ok(())
}

/// Tests listing the drinks served at a restaurant.
///
/// Expected: Only linked drinks, ordered by name
#[tokio::test]
async fn lists_drinks_at_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let spritz = factory::drink::DrinkFactory::new(db).name("Spritz").build().await?;
    let americano = factory::drink::DrinkFactory::new(db).name("Americano").build().await?;
    let _unserved = factory::create_drink(db).await?;
    let bar = factory::restaurant::RestaurantFactory::new(db)
        .serves(spritz.id)
        .serves(americano.id)
        .build()
        .await?;

    let repo = DrinkRepository::new(db);
    let names: Vec<String> = repo
        .find_by_restaurant(bar.id)
        .await?
        .into_iter()
        .map(|d| d.name)
        .collect();

    assert_eq!(names, vec!["Americano", "Spritz"]);

    let all = repo.all_names().await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests search over categories with non-ASCII capitals.
///
/// Expected: The drink whose category is `ÄPFELWEIN` matches `äpfel`
#[tokio::test]
async fn folds_non_ascii_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalogue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drink::DrinkFactory::new(db)
        .name("Frankfurter")
        .category("ÄPFELWEIN")
        .build()
        .await?;
    factory::drink::DrinkFactory::new(db)
        .name("Pilsner")
        .category("Beer")
        .build()
        .await?;

    let repo = DrinkRepository::new(db);
    let drinks = repo.search("äpfel").await?;

    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "Frankfurter");

    Ok(())
}
