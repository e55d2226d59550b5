use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{User, UserInput};
use crate::errors_service::UserServiceError;
use crate::repository::traits::UserRepositoryTrait;
use crate::repository::UserRepository;

/// Operations the HTTP layer depends on.
///
/// `get_user`, `update_user` and `delete_user` fail with
/// [`UserServiceError::NotFound`] when no user has the given id.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>, UserServiceError>;
    async fn get_user(&self, user_id: i64) -> Result<User, UserServiceError>;
    async fn create_user(&self, input: UserInput) -> Result<User, UserServiceError>;
    async fn update_user(&self, user_id: i64, input: UserInput) -> Result<User, UserServiceError>;
    /// Returns the id of the removed user.
    async fn delete_user(&self, user_id: i64) -> Result<i64, UserServiceError>;
}

#[derive(Debug, Clone)]
pub struct UserService<U = UserRepository>
where
    U: UserRepositoryTrait,
{
    pub user_repo: Arc<U>,
}

impl UserService<UserRepository> {
    pub fn new(user_repo: UserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
        }
    }
}

impl<U> UserService<U>
where
    U: UserRepositoryTrait,
{
    pub fn with_repo(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserServiceTrait for UserService<U>
where
    U: UserRepositoryTrait + 'static,
{
    async fn get_users(&self) -> Result<Vec<User>, UserServiceError> {
        let rows = self.user_repo.get_users().await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, user_id: i64) -> Result<User, UserServiceError> {
        self.user_repo
            .get_user(user_id)
            .await?
            .map(User::from)
            .ok_or(UserServiceError::NotFound(user_id))
    }

    async fn create_user(&self, input: UserInput) -> Result<User, UserServiceError> {
        let row = self.user_repo.create_user(&input).await?;
        tracing::info!(user_id = row.id, "user created");
        Ok(User::from(row))
    }

    async fn update_user(&self, user_id: i64, input: UserInput) -> Result<User, UserServiceError> {
        let row = self
            .user_repo
            .update_user(user_id, &input)
            .await?
            .ok_or(UserServiceError::NotFound(user_id))?;
        tracing::info!(user_id, "user updated");
        Ok(User::from(row))
    }

    async fn delete_user(&self, user_id: i64) -> Result<i64, UserServiceError> {
        if !self.user_repo.delete_user(user_id).await? {
            return Err(UserServiceError::NotFound(user_id));
        }
        tracing::info!(user_id, "user deleted");
        Ok(user_id)
    }
}
