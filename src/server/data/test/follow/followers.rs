use super::*;

/// Tests that followers and following are two views of the same edges.
///
/// Verifies that `b` appears in `a`'s following exactly when `a` appears in
/// `b`'s followers, with both lists ordered by username.
///
/// Expected: Ok with mirrored lists
#[tokio::test]
async fn views_agree() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zoe = factory::user::UserFactory::new(db).username("zoe").build().await?;
    let adam = factory::user::UserFactory::new(db).username("adam").build().await?;
    let mia = factory::user::UserFactory::new(db).username("mia").build().await?;

    factory::create_follow(db, zoe.id, mia.id).await?;
    factory::create_follow(db, adam.id, mia.id).await?;
    factory::create_follow(db, mia.id, zoe.id).await?;

    let repo = FollowRepository::new(db);

    let mia_followers: Vec<String> = repo
        .followers(mia.id)
        .await?
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(mia_followers, vec!["adam", "zoe"]);

    let zoe_following: Vec<i32> = repo.following(zoe.id).await?.iter().map(|u| u.id).collect();
    assert_eq!(zoe_following, vec![mia.id]);

    let adam_following = repo.following(adam.id).await?;
    assert_eq!(adam_following.len(), 1);
    assert_eq!(adam_following[0].id, mia.id);

    let mut follower_ids = repo.follower_ids(mia.id).await?;
    follower_ids.sort_unstable();
    let mut expected = vec![zoe.id, adam.id];
    expected.sort_unstable();
    assert_eq!(follower_ids, expected);

    assert_eq!(repo.following_ids(mia.id).await?, vec![zoe.id]);

    Ok(())
}

/// Tests a user with no edges.
///
/// Expected: Empty lists
#[tokio::test]
async fn empty_for_isolated_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    assert!(repo.followers(user.id).await?.is_empty());
    assert!(repo.following(user.id).await?.is_empty());

    Ok(())
}
