use super::*;

/// Tests removing an existing follow edge.
///
/// Expected: Ok(true) and no stored edges
#[tokio::test]
async fn removes_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    factory::create_follow(db, follower.id, followed.id).await?;

    let repo = FollowRepository::new(db);
    let removed = repo.unfollow(follower.id, followed.id).await?;

    assert!(removed);
    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 0);

    Ok(())
}

/// Tests unfollowing a user who is not followed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    factory::create_follow(db, followed.id, follower.id).await?;

    let repo = FollowRepository::new(db);
    let removed = repo.unfollow(follower.id, followed.id).await?;

    assert!(!removed);
    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 1);

    Ok(())
}
