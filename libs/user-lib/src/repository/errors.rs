#[derive(Debug)]
pub enum UserRepositoryError {
    /// The database handed back an id that does not fit the domain type.
    InvalidId(u64),
    Sqlx(sqlx::Error),
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::InvalidId(id) => write!(f, "generated id {id} is out of range"),
            UserRepositoryError::Sqlx(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UserRepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UserRepositoryError::InvalidId(_) => None,
            UserRepositoryError::Sqlx(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for UserRepositoryError {
    fn from(value: sqlx::Error) -> Self {
        UserRepositoryError::Sqlx(value)
    }
}
