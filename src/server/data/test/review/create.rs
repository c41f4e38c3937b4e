use super::*;

/// Tests inserting a drink review.
///
/// Expected: Ok with the drink set, the restaurant empty, and the photo URL stored
#[tokio::test]
async fn creates_drink_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(
            CreateReviewParam {
                user_id: user.id,
                target: ReviewTarget::Drink(drink.id),
                rating: 4,
                comment: "Bright and bitter".to_string(),
                impairment_level: Some(2),
            },
            Some("/uploads/photo.jpg".to_string()),
        )
        .await?;

    assert_eq!(review.drink_id, Some(drink.id));
    assert_eq!(review.restaurant_id, None);
    assert_eq!(review.rating, 4);
    assert_eq!(review.impairment_level, Some(2));
    assert_eq!(review.photo_url.as_deref(), Some("/uploads/photo.jpg"));

    let loaded = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(loaded.author.id, user.id);
    assert_eq!(loaded.drink_name.as_deref(), Some(drink.name.as_str()));
    assert!(loaded.restaurant_name.is_none());

    Ok(())
}

/// Tests duplicate detection on author, target and comment.
///
/// Expected: true only for the same triple
#[tokio::test]
async fn detects_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;
    let other_drink = factory::create_drink(db).await?;
    factory::review::ReviewFactory::for_drink(db, user.id, drink.id)
        .comment("Great")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);

    assert!(
        repo.exists_duplicate(user.id, ReviewTarget::Drink(drink.id), "Great")
            .await?
    );
    assert!(
        !repo
            .exists_duplicate(user.id, ReviewTarget::Drink(drink.id), "Different")
            .await?
    );
    assert!(
        !repo
            .exists_duplicate(user.id, ReviewTarget::Drink(other_drink.id), "Great")
            .await?
    );

    Ok(())
}
