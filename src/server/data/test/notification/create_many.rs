use super::*;

/// Tests inserting notifications for several recipients.
///
/// Verifies that each recipient sees only their own notification, unread, with the
/// actor resolved.
///
/// Expected: Ok(2) and one notification per recipient
#[tokio::test]
async fn creates_for_each_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_user(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let drink = factory::create_drink(db).await?;

    let repo = NotificationRepository::new(db);
    let inserted = repo
        .create_many(
            [first.id, second.id]
                .into_iter()
                .map(|recipient_id| CreateNotificationParam {
                    recipient_id,
                    actor_id: actor.id,
                    activity_type: ActivityType::Review,
                    drink_id: Some(drink.id),
                    restaurant_id: None,
                })
                .collect(),
        )
        .await?;

    assert_eq!(inserted, 2);

    let notifications = repo.get_by_recipient(first.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].actor.id, actor.id);
    assert_eq!(notifications[0].activity_type, "review");
    assert_eq!(notifications[0].drink_id, Some(drink.id));
    assert!(!notifications[0].read);

    assert!(repo.get_by_recipient(actor.id).await?.is_empty());

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.create_many(Vec::new()).await?, 0);

    Ok(())
}
