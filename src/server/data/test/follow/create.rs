use super::*;

/// Tests creating a follow edge.
///
/// Expected: Ok(true) and one stored edge
#[tokio::test]
async fn creates_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    let created = repo.follow(follower.id, followed.id).await?;

    assert!(created);
    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 1);

    Ok(())
}

/// Tests following the same user twice.
///
/// Verifies that the second insert is ignored rather than duplicated.
///
/// Expected: Ok(false) on the second call and still one stored edge
#[tokio::test]
async fn ignores_existing_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    assert!(repo.follow(follower.id, followed.id).await?);
    assert!(!repo.follow(follower.id, followed.id).await?);

    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 1);

    Ok(())
}

/// Tests that edges are directed.
///
/// Expected: Following back creates a second, reverse edge
#[tokio::test]
async fn reverse_edge_is_distinct() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    assert!(repo.follow(a.id, b.id).await?);
    assert!(repo.follow(b.id, a.id).await?);

    assert_eq!(entity::prelude::UserFollow::find().count(db).await?, 2);

    Ok(())
}
