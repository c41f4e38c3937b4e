use super::*;

/// Tests ranking users by number of reviews.
///
/// Verifies that users are ordered by review count, ties broken by username, and
/// users without reviews are left out.
///
/// Expected: Ok with ranked users and counts
#[tokio::test]
async fn ranks_by_review_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let carol = factory::user::UserFactory::new(db).username("carol").build().await?;
    let bob = factory::user::UserFactory::new(db).username("bob").build().await?;
    let alice = factory::user::UserFactory::new(db).username("alice").build().await?;
    let _idle = factory::user::UserFactory::new(db).username("idle").build().await?;
    let drink = factory::create_drink(db).await?;

    factory::helpers::create_drink_reviews(db, carol.id, drink.id, 3).await?;
    factory::helpers::create_drink_reviews(db, bob.id, drink.id, 1).await?;
    factory::helpers::create_drink_reviews(db, alice.id, drink.id, 1).await?;

    let repo = UserRepository::new(db);
    let top = repo.top_reviewers(10).await?;

    let ranked: Vec<(&str, u64)> = top
        .iter()
        .map(|t| (t.user.username.as_str(), t.total_reviews))
        .collect();
    assert_eq!(ranked, vec![("carol", 3), ("alice", 1), ("bob", 1)]);

    Ok(())
}

/// Tests that the ranking honours the limit.
///
/// Expected: At most `limit` users
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drink = factory::create_drink(db).await?;
    for _ in 0..4 {
        let user = factory::create_user(db).await?;
        factory::create_drink_review(db, user.id, drink.id).await?;
    }

    let repo = UserRepository::new(db);
    let top = repo.top_reviewers(2).await?;

    assert_eq!(top.len(), 2);

    Ok(())
}
