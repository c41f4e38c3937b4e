use super::*;

/// Tests updating only some profile fields.
///
/// Verifies that fields passed as `None` keep their stored value.
///
/// Expected: Ok with location changed and username kept
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .location("Lisbon")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_fields(
        user.id,
        UpdateUserFields {
            username: None,
            profile_picture: Some("/uploads/bob.png".to_string()),
            location: Some("Porto".to_string()),
        },
    )
    .await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.username, "bob");
    assert_eq!(updated.location.as_deref(), Some("Porto"));
    assert_eq!(updated.profile_picture.as_deref(), Some("/uploads/bob.png"));

    Ok(())
}

/// Tests that a username update to a taken name is rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update_fields(
            second.id,
            UpdateUserFields {
                username: Some(first.username.clone()),
                profile_picture: None,
                location: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
