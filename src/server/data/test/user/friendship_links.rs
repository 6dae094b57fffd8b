use super::*;

/// Tests that a new link is FOLLOWED.
///
/// Expected: the friend id is returned when filtering on FOLLOWED
#[tokio::test]
async fn adds_followed_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let friend = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    repo.add_friendship_link(user.id, friend.id).await?;

    let ids = repo
        .get_friends_ids(user.id, &[FriendshipStatus::Followed], &[])
        .await?;
    assert_eq!(ids, vec![friend.id]);

    Ok(())
}

/// Tests that adding an existing link keeps its status.
///
/// Expected: Ok and the link is still BLOCKED
#[tokio::test]
async fn keeps_status_of_existing_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let friend = create_user(db).await?;
    create_friendship(db, user.id, friend.id, "BLOCKED").await?;

    let repo = DbUserRepository::new(db.clone());
    repo.add_friendship_link(user.id, friend.id).await?;

    let ids = repo
        .get_friends_ids(user.id, &[FriendshipStatus::Blocked], &[])
        .await?;
    assert_eq!(ids, vec![friend.id]);

    Ok(())
}

/// Tests removing one direction of a mutual friendship.
///
/// Expected: the removed direction is gone, the other one remains
#[tokio::test]
async fn removes_one_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let friend = create_user(db).await?;
    create_mutual_friends(db, user.id, friend.id).await?;

    let repo = DbUserRepository::new(db.clone());
    repo.remove_friendship_link(user.id, friend.id).await?;

    assert!(repo.get_friends_ids(user.id, &[], &[]).await?.is_empty());
    assert_eq!(repo.get_friends_ids(friend.id, &[], &[]).await?, vec![user.id]);

    Ok(())
}

/// Tests removing a link that does not exist.
///
/// Expected: Ok
#[tokio::test]
async fn removing_missing_link_succeeds() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DbUserRepository::new(db.clone());
    let result = repo.remove_friendship_link(1, 2).await;

    assert!(result.is_ok());
}
