use super::*;

/// Tests case-insensitive substring search over usernames.
///
/// Expected: Matching users ordered by username
#[tokio::test]
async fn matches_case_insensitive_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).username("MartiniFan").build().await?;
    factory::user::UserFactory::new(db).username("amartin").build().await?;
    factory::user::UserFactory::new(db).username("beerlover").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.search_by_username("MARTIN").await?;

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["MartiniFan", "amartin"]);

    Ok(())
}

/// Tests that wildcard characters in the query match literally.
///
/// Expected: Only the username containing a literal `_` matches
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).username("gin_tonic").build().await?;
    factory::user::UserFactory::new(db).username("ginxtonic").build().await?;

    let repo = UserRepository::new(db);

    let underscore = repo.search_by_username("n_t").await?;
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].username, "gin_tonic");

    let percent = repo.search_by_username("%").await?;
    assert!(percent.is_empty());

    Ok(())
}

/// Tests usernames containing non-ASCII capitals.
///
/// Expected: `ørjan` matches `ØRJAN_B`
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).username("ØRJAN_B").build().await?;
    factory::user::UserFactory::new(db).username("orjan").build().await?;

    let users = UserRepository::new(db).search_by_username("ørjan").await?;

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["ØRJAN_B"]);

    Ok(())
}
