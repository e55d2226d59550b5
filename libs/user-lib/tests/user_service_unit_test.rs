use std::sync::Arc;
use async_trait::async_trait;
use mockall::mock;

use user_lib::entities::UserInput;
use user_lib::repository::errors::UserRepositoryError;
use user_lib::repository::models::UserRow;
use user_lib::repository::traits::UserRepositoryTrait;
use user_lib::errors_service::UserServiceError;
use user_lib::user_service::{UserService, UserServiceTrait};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepositoryTrait for UserRepo {
        async fn create_user(&self, input: &UserInput) -> Result<UserRow, UserRepositoryError>;
        async fn get_user(&self, user_id: i64) -> Result<Option<UserRow>, UserRepositoryError>;
        async fn get_users(&self) -> Result<Vec<UserRow>, UserRepositoryError>;
        async fn update_user(&self, user_id: i64, input: &UserInput) -> Result<Option<UserRow>, UserRepositoryError>;
        async fn delete_user(&self, user_id: i64) -> Result<bool, UserRepositoryError>;
    }
}

fn create_test_service(user_repo: MockUserRepo) -> UserService<MockUserRepo> {
    UserService::with_repo(Arc::new(user_repo))
}

fn row(id: i64, name: &str, email: &str, password: &str) -> UserRow {
    UserRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ==================== CREATE USER TESTS ====================

#[tokio::test]
async fn test_create_user_success() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_create_user()
        .withf(|input| input.name == "test" && input.email == "test@test.com" && input.password == "pass")
        .times(1)
        .returning(|input| Ok(row(1, &input.name, &input.email, &input.password)));

    let service = create_test_service(user_repo);

    let user = service
        .create_user(UserInput::new("test", "test@test.com", "pass"))
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "test");
    assert_eq!(user.email, "test@test.com");
    assert_eq!(user.password, "pass");
}

#[tokio::test]
async fn test_create_user_database_error_is_internal() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_create_user()
        .times(1)
        .returning(|_| Err(UserRepositoryError::Sqlx(sqlx::Error::PoolTimedOut)));

    let service = create_test_service(user_repo);

    let result = service
        .create_user(UserInput::new("test", "test@test.com", "pass"))
        .await;

    assert!(matches!(result, Err(UserServiceError::Internal(_))));
}

// ==================== GET USER TESTS ====================

#[tokio::test]
async fn test_get_user_found() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_get_user()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|id| Ok(Some(row(id, "seven", "seven@test.com", "pw"))));

    let service = create_test_service(user_repo);

    let user = service.get_user(7).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "seven");
}

#[tokio::test]
async fn test_get_user_missing_is_not_found() {
    let mut user_repo = MockUserRepo::new();

    user_repo.expect_get_user().times(1).returning(|_| Ok(None));

    let service = create_test_service(user_repo);

    let result = service.get_user(-1).await;
    assert!(matches!(result, Err(UserServiceError::NotFound(-1))));
}

// ==================== GET USERS TESTS ====================

#[tokio::test]
async fn test_get_users_preserves_repository_order() {
    let mut user_repo = MockUserRepo::new();

    user_repo.expect_get_users().times(1).returning(|| {
        Ok(vec![
            row(1, "alice", "alice@test.com", "a"),
            row(2, "bob", "bob@test.com", "b"),
        ])
    });

    let service = create_test_service(user_repo);

    let users = service.get_users().await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_get_users_empty() {
    let mut user_repo = MockUserRepo::new();

    user_repo.expect_get_users().times(1).returning(|| Ok(vec![]));

    let service = create_test_service(user_repo);

    assert!(service.get_users().await.unwrap().is_empty());
}

// ==================== UPDATE USER TESTS ====================

#[tokio::test]
async fn test_update_user_success() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_update_user()
        .withf(|id, input| *id == 1 && input.name == "new_test")
        .times(1)
        .returning(|id, input| Ok(Some(row(id, &input.name, &input.email, &input.password))));

    let service = create_test_service(user_repo);

    let user = service
        .update_user(1, UserInput::new("new_test", "new@test.com", "new_pass"))
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "new_test");
    assert_eq!(user.email, "new@test.com");
    assert_eq!(user.password, "new_pass");
}

#[tokio::test]
async fn test_update_user_missing_is_not_found() {
    let mut user_repo = MockUserRepo::new();

    user_repo.expect_update_user().times(1).returning(|_, _| Ok(None));

    let service = create_test_service(user_repo);

    let result = service
        .update_user(-1, UserInput::new("new_test", "new@test.com", "new_pass"))
        .await;

    assert!(matches!(result, Err(UserServiceError::NotFound(-1))));
}

// ==================== DELETE USER TESTS ====================

#[tokio::test]
async fn test_delete_user_returns_deleted_id() {
    let mut user_repo = MockUserRepo::new();

    user_repo
        .expect_delete_user()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|_| Ok(true));

    let service = create_test_service(user_repo);

    assert_eq!(service.delete_user(1).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_user_missing_is_not_found() {
    let mut user_repo = MockUserRepo::new();

    user_repo.expect_delete_user().times(1).returning(|_| Ok(false));

    let service = create_test_service(user_repo);

    let err = service.delete_user(-1).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "user -1 not found");
}
