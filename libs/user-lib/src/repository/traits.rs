use async_trait::async_trait;

use crate::entities::UserInput;
use crate::repository::errors::UserRepositoryError;
use crate::repository::models::UserRow;

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(&self, input: &UserInput) -> Result<UserRow, UserRepositoryError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<UserRow>, UserRepositoryError>;
    async fn get_users(&self) -> Result<Vec<UserRow>, UserRepositoryError>;
    /// Returns `None` when no row has `user_id`.
    async fn update_user(&self, user_id: i64, input: &UserInput) -> Result<Option<UserRow>, UserRepositoryError>;
    /// Returns `false` when no row has `user_id`.
    async fn delete_user(&self, user_id: i64) -> Result<bool, UserRepositoryError>;
}
