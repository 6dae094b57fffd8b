use super::*;

/// Tests that the BLOCKED filter ignores followed and unfollowed links.
///
/// Expected: Ok with only the blocked friend id
#[tokio::test]
async fn filters_blocked_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let followed = create_user(db).await?;
    let unfollowed = create_user(db).await?;
    let blocked = create_user(db).await?;
    create_friendship(db, user.id, followed.id, "FOLLOWED").await?;
    create_friendship(db, user.id, unfollowed.id, "UNFOLLOWED").await?;
    create_friendship(db, user.id, blocked.id, "BLOCKED").await?;

    let repo = DbUserRepository::new(db.clone());
    let ids = repo
        .get_friends_ids(
            user.id,
            &[FriendshipStatus::Blocked],
            &[FriendshipStatus::Followed, FriendshipStatus::Unfollowed],
        )
        .await?;

    assert_eq!(ids, vec![blocked.id]);

    Ok(())
}

/// Tests that an empty include list matches every status not excluded.
///
/// Expected: Ok with the followed and unfollowed ids
#[tokio::test]
async fn empty_include_matches_any_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let followed = create_user(db).await?;
    let unfollowed = create_user(db).await?;
    let blocked = create_user(db).await?;
    create_friendship(db, user.id, followed.id, "FOLLOWED").await?;
    create_friendship(db, user.id, unfollowed.id, "UNFOLLOWED").await?;
    create_friendship(db, user.id, blocked.id, "BLOCKED").await?;

    let repo = DbUserRepository::new(db.clone());
    let ids = repo
        .get_friends_ids(user.id, &[], &[FriendshipStatus::Blocked])
        .await?;

    assert_eq!(ids, vec![followed.id, unfollowed.id]);

    Ok(())
}

/// Tests that links are directed.
///
/// A link from the friend to the user does not make the friend appear in the user's ids.
///
/// Expected: Ok with an empty list for the user
#[tokio::test]
async fn ignores_links_from_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let friend = create_user(db).await?;
    create_friendship(db, friend.id, user.id, "FOLLOWED").await?;

    let repo = DbUserRepository::new(db.clone());
    let ids = repo.get_friends_ids(user.id, &[], &[]).await?;

    assert!(ids.is_empty());

    Ok(())
}
