use async_trait::async_trait;
use sqlx::{query, query_as, MySqlPool};

use crate::entities::UserInput;
use crate::repository::errors::UserRepositoryError;
use crate::repository::models::UserRow;
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pub pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, user_id: i64) -> Result<Option<UserRow>, UserRepositoryError> {
        let user = query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password FROM users WHERE id = ?
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, input: &UserInput) -> Result<UserRow, UserRepositoryError> {
        let result = query(
            r#"
            INSERT INTO users (name, email, password)
            VALUES (?, ?, ?)
            "#
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password)
        .execute(&self.pool)
        .await?;

        let raw_id = result.last_insert_id();
        let user_id = i64::try_from(raw_id).map_err(|_| UserRepositoryError::InvalidId(raw_id))?;

        let user = query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password FROM users WHERE id = ?
            "#
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<UserRow>, UserRepositoryError> {
        self.fetch_by_id(user_id).await
    }

    async fn get_users(&self) -> Result<Vec<UserRow>, UserRepositoryError> {
        let users = query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password FROM users ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_user(&self, user_id: i64, input: &UserInput) -> Result<Option<UserRow>, UserRepositoryError> {
        // MySQL reports changed rows, not matched rows, so existence is
        // decided by the read-back below rather than rows_affected().
        query(
            r#"
            UPDATE users
            SET name = ?, email = ?, password = ?
            WHERE id = ?
            "#
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        self.fetch_by_id(user_id).await
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, UserRepositoryError> {
        let result = query(
            r#"
            DELETE FROM users WHERE id = ?
            "#
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
