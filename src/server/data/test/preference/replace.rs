use super::*;

/// Tests storing preference lists in the order given.
///
/// Expected: Names returned in list order, not alphabetical order
#[tokio::test]
async fn keeps_list_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let negroni = factory::drink::DrinkFactory::new(db).name("Negroni").build().await?;
    let aperol = factory::drink::DrinkFactory::new(db).name("Aperol Spritz").build().await?;
    let bar = factory::restaurant::RestaurantFactory::new(db)
        .name("Bar Basso")
        .build()
        .await?;

    let repo = PreferenceRepository::new(db);
    repo.replace_drinks(user.id, &[negroni.id, aperol.id]).await?;
    repo.replace_restaurants(user.id, &[bar.id]).await?;

    let preferences = repo.get_names(user.id).await?;
    assert_eq!(preferences.drink, vec!["Negroni", "Aperol Spritz"]);
    assert_eq!(preferences.restaurant, vec!["Bar Basso"]);

    Ok(())
}

/// Tests that replacing a list drops the previous entries.
///
/// Expected: Only the new list remains; an empty list clears it
#[tokio::test]
async fn replaces_previous_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_drink(db).await?;
    let second = factory::create_drink(db).await?;

    let repo = PreferenceRepository::new(db);
    repo.replace_drinks(user.id, &[first.id]).await?;
    repo.replace_drinks(user.id, &[second.id]).await?;

    assert_eq!(repo.get_names(user.id).await?.drink, vec![second.name.clone()]);

    repo.replace_drinks(user.id, &[]).await?;
    assert!(repo.get_names(user.id).await?.drink.is_empty());

    Ok(())
}

/// Tests that lists are kept per user.
///
/// Expected: Another user's preferences are untouched
#[tokio::test]
async fn scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;

    let repo = PreferenceRepository::new(db);
    repo.replace_drinks(user.id, &[drink.id]).await?;
    repo.replace_drinks(other.id, &[drink.id]).await?;
    repo.replace_drinks(user.id, &[]).await?;

    assert!(repo.get_names(user.id).await?.drink.is_empty());
    assert_eq!(repo.get_names(other.id).await?.drink, vec![drink.name.clone()]);

    Ok(())
}
