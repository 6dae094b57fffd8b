use super::*;

/// Tests storing a new position.
///
/// Expected: Ok and the user reads back with the new coordinates
#[tokio::test]
async fn updates_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = create_user(db).await?;

    let repo = DbUserRepository::new(db.clone());
    repo.update_position(stored.id, -73.5673, 45.5017).await?;

    let user = repo.get_user(stored.id).await?;
    assert_eq!(user.longitude(), -73.5673);
    assert_eq!(user.latitude(), 45.5017);

    Ok(())
}

/// Tests storing a position for an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DbUserRepository::new(db.clone());
    let result = repo.update_position(999_999, 1.0, 1.0).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
