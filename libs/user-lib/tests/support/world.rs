use async_trait::async_trait;
use cucumber::World;
use mockall::mock;
use std::sync::Arc;

use user_lib::entities::{User, UserInput};
use user_lib::errors_service::UserServiceError;
use user_lib::repository::errors::UserRepositoryError;
use user_lib::repository::models::UserRow;
use user_lib::repository::traits::UserRepositoryTrait;
use user_lib::user_service::UserService;

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

#[derive(Debug, Default, World)]
pub struct TestWorld {
    // State
    pub current_user: Option<User>,
    pub stored_users: Vec<UserRow>,

    // Results
    pub user_result: Option<Result<User, UserServiceError>>,
    pub users_result: Option<Result<Vec<User>, UserServiceError>>,
    pub delete_result: Option<Result<i64, UserServiceError>>,
}

impl TestWorld {
    pub fn create_service_with_mock(
        &self,
        setup_user_repo: impl FnOnce(&mut MockUserRepo),
    ) -> UserService<MockUserRepo> {
        let mut user_repo = MockUserRepo::new();
        setup_user_repo(&mut user_repo);
        UserService::with_repo(Arc::new(user_repo))
    }

    pub fn find_stored(&self, user_id: i64) -> Option<UserRow> {
        self.stored_users.iter().find(|row| row.id == user_id).cloned()
    }

    pub fn last_error(&self) -> Option<&UserServiceError> {
        self.user_result
            .as_ref()
            .and_then(|r| r.as_ref().err())
            .or_else(|| self.delete_result.as_ref().and_then(|r| r.as_ref().err()))
    }
}
