use crate::repository::errors::UserRepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UserServiceError {
    #[error("user {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UserServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserServiceError::NotFound(_))
    }
}

impl From<UserRepositoryError> for UserServiceError {
    fn from(err: UserRepositoryError) -> Self {
        UserServiceError::Internal(err.into())
    }
}
