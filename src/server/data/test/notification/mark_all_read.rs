use super::*;

fn follow_notification(recipient_id: i32, actor_id: i32) -> CreateNotificationParam {
    CreateNotificationParam {
        recipient_id,
        actor_id,
        activity_type: ActivityType::Follow,
        drink_id: None,
        restaurant_id: None,
    }
}

/// Tests marking a user's notifications as read.
///
/// Verifies that only unread notifications of that user change, so a second call
/// reports nothing updated.
///
/// Expected: Ok(2), then Ok(0)
#[tokio::test]
async fn marks_unread_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let actor = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create_many(vec![
        follow_notification(user.id, actor.id),
        follow_notification(user.id, other.id),
        follow_notification(other.id, actor.id),
    ])
    .await?;

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.mark_all_read(user.id).await?, 0);

    assert!(repo.get_by_recipient(user.id).await?.iter().all(|n| n.read));
    assert!(repo.get_by_recipient(other.id).await?.iter().all(|n| !n.read));

    Ok(())
}
