use super::*;
use crate::server::service::follow::FollowService;

/// Tests following a user.
///
/// Verifies that the edge is visible from both sides and the followed user gets one
/// follow notification from the follower.
///
/// Expected: Ok with one edge and one notification
#[tokio::test]
async fn follows_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let service = FollowService::new(db);
    service.follow(a.id, b.id).await?;

    let followers = service.followers(b.id).await?;
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, a.id);

    let following = service.following(a.id).await?;
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].id, b.id);

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].recipient_id, b.id);
    assert_eq!(notifications[0].actor_id, a.id);
    assert_eq!(notifications[0].activity_type, "follow");

    Ok(())
}

/// Tests following the same user twice.
///
/// Expected: Err(BadRequest) and no second notification
#[tokio::test]
async fn rejects_second_follow() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let service = FollowService::new(db);
    service.follow(a.id, b.id).await?;
    let result = service.follow(a.id, b.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 1);

    Ok(())
}

/// Tests following yourself.
///
/// Expected: Err(BadRequest) and no edge
#[tokio::test]
async fn rejects_self_follow() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;

    let result = FollowService::new(db).follow(a.id, a.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 0);

    Ok(())
}

/// Tests following a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;

    let result = FollowService::new(db).follow(a.id, a.id + 1000).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests unfollowing.
///
/// Verifies that a followed user can be unfollowed once, and that unfollowing again
/// is rejected.
///
/// Expected: Ok, then Err(BadRequest)
#[tokio::test]
async fn unfollows_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_follow(db, a.id, b.id).await?;

    let service = FollowService::new(db);
    service.unfollow(a.id, b.id).await?;

    assert!(service.following(a.id).await?.is_empty());

    let result = service.unfollow(a.id, b.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the feed of reviews by followed users.
///
/// Expected: Only reviews by followed users, newest first
#[tokio::test]
async fn feed_contains_followed_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;
    factory::create_follow(db, reader.id, followed.id).await?;

    let now = chrono::Utc::now();
    let older = factory::review::ReviewFactory::for_drink(db, followed.id, drink.id)
        .created_at(now - chrono::Duration::minutes(5))
        .build()
        .await?;
    let newer = factory::review::ReviewFactory::for_drink(db, followed.id, drink.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_drink_review(db, stranger.id, drink.id).await?;

    let feed = FollowService::new(db).following_reviews(reader.id).await?;
    let ids: Vec<i32> = feed.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
