pub mod entities;
pub mod routes;

pub mod create_user;
pub mod delete_user;
pub mod get_user_by_id;
pub mod get_users;
pub mod health_check;
pub mod update_user;

use crate::error::ApiError;

/// Path ids are parsed by hand so a malformed id gets the same JSON 400
/// body as any other bad request.
pub(crate) fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::invalid_id(raw))
}
