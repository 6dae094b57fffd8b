use super::*;

/// Tests recording an invitation.
///
/// Expected: the inviter id appears in the invitee's pending invitations only
#[tokio::test]
async fn invites_friend() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = create_user(db).await?;
    let invitee = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    repo.invite_friend(inviter.id, invitee.id).await?;

    assert_eq!(repo.get_invitation_ids(invitee.id).await?, vec![inviter.id]);
    assert!(repo.get_invitation_ids(inviter.id).await?.is_empty());

    Ok(())
}

/// Tests that the invitation table refers to existing users.
///
/// Expected: Err for an unknown invitee and nothing pending
#[tokio::test]
async fn refuses_invitation_to_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    let result = repo.invite_friend(inviter.id, 999_999).await;

    assert!(result.is_err());
    assert!(repo.get_invitation_ids(999_999).await?.is_empty());

    Ok(())
}

/// Tests that inviting twice keeps a single invitation.
///
/// Expected: Ok for both calls and one pending inviter id
#[tokio::test]
async fn collapses_duplicate_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = create_user(db).await?;
    let invitee = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    repo.invite_friend(inviter.id, invitee.id).await?;
    repo.invite_friend(inviter.id, invitee.id).await?;

    assert_eq!(repo.get_invitation_ids(invitee.id).await?, vec![inviter.id]);

    Ok(())
}

/// Tests removing an invitation in the given direction only.
///
/// Expected: Ok(false) for the reversed pair, Ok(true) for the real one, then nothing pending
#[tokio::test]
async fn removes_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = create_user(db).await?;
    let invitee = create_user(db).await?;
    create_invitation(db, inviter.id, invitee.id).await?;

    let repo = DbUserRepository::new(db.clone());

    assert!(!repo.remove_invitation(invitee.id, inviter.id).await?);
    assert!(repo.remove_invitation(inviter.id, invitee.id).await?);
    assert!(repo.get_invitation_ids(invitee.id).await?.is_empty());

    Ok(())
}
