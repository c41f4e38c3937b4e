use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository stores username, email and hash, and leaves the
/// optional profile fields empty.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "hash");
    assert!(user.profile_picture.is_none());
    assert!(user.location.is_none());

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Verifies that inserting a second account with an existing email is rejected
/// by the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "someone_else".to_string(),
            email: existing.email.clone(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking users up by email and username.
///
/// Expected: Some for the stored values, None for unknown ones
#[tokio::test]
async fn finds_by_email_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let by_email = repo.find_by_email(&user.email).await?;
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let by_username = repo.find_by_username(&user.username).await?;
    assert_eq!(by_username.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_email("missing@tippsy.test").await?.is_none());
    assert!(repo.find_by_username("missing").await?.is_none());

    Ok(())
}
