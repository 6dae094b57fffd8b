use super::*;

/// Tests the prefix search.
///
/// Expected: Ok with names starting with the text in any case, ordered by name
#[tokio::test]
async fn finds_users_by_name_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = create_user(db).await?;
    create_user_with_name(db, 9001, "alice").await?;
    create_user_with_name(db, 9002, "Alfred").await?;
    create_user_with_name(db, 9003, "Bob").await?;
    create_user_with_name(db, 9004, "Malik").await?;

    let repo = DbUserRepository::new(db.clone());
    let users = repo.find_users(caller.id, "AL").await?;

    let names: Vec<&str> = users.iter().map(|u| u.name()).collect();
    assert_eq!(names, vec!["Alfred", "alice"]);

    Ok(())
}

/// Tests that the caller is never returned.
///
/// Expected: Ok without the caller even though their name matches
#[tokio::test]
async fn excludes_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = create_user_with_name(db, 9101, "Alice").await?;
    let other = create_user_with_name(db, 9102, "Alicia").await?;

    let repo = DbUserRepository::new(db.clone());
    let users = repo.find_users(caller.id, "ali").await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id(), other.id);

    Ok(())
}

/// Tests that LIKE wildcards in the search text match literally.
///
/// Expected: Ok with only the name containing a literal underscore
#[tokio::test]
async fn matches_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = create_user(db).await?;
    create_user_with_name(db, 9201, "a_b").await?;
    create_user_with_name(db, 9202, "axb").await?;

    let repo = DbUserRepository::new(db.clone());
    let underscore = repo.find_users(caller.id, "a_").await?;
    let percent = repo.find_users(caller.id, "%").await?;

    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name(), "a_b");
    assert!(percent.is_empty());

    Ok(())
}
