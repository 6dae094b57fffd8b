use super::*;

/// Tests fetching an existing user.
///
/// Expected: Ok with the stored fields converted to the domain model
#[tokio::test]
async fn gets_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db)
        .name("Alice")
        .visibility("INVISIBLE")
        .position(6.5668, 46.5191)
        .build()
        .await?;

    let repo = DbUserRepository::new(db.clone());
    let user = repo.get_user(stored.id).await?;

    assert_eq!(user.id(), stored.id);
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.visibility(), Visibility::Invisible);
    assert_eq!(user.longitude(), 6.5668);

    Ok(())
}

/// Tests fetching an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DbUserRepository::new(db.clone());
    let result = repo.get_user(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests that a stored row breaking the user invariants is rejected.
///
/// Expected: Err(InternalError)
#[tokio::test]
async fn rejects_invalid_stored_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db).visibility("HIDDEN").build().await?;

    let repo = DbUserRepository::new(db.clone());
    let result = repo.get_user(stored.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}

/// Tests fetching several users at once.
///
/// Expected: Ok with the existing users ordered by id and unknown ids skipped
#[tokio::test]
async fn gets_users_skipping_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_user(db).await?;
    let second = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    let users = repo.get_users(&[second.id, 999_999, first.id]).await?;

    let ids: Vec<i64> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests fetching no users.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn gets_no_users_for_empty_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DbUserRepository::new(db.clone());
    let users = repo.get_users(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
