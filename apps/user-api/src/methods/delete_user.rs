use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use crate::error::{ApiError, handle_service_error};
use crate::methods::parse_user_id;
use crate::state::AppState;
use crate::methods::routes::USERS_BY_ID_PATH;

#[utoipa::path(
    delete,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let user_id = parse_user_id(&id)?;

    state.user_service
        .delete_user(user_id)
        .await
        .map(|deleted_id| {
            tracing::debug!(user_id = deleted_id, "delete_user succeeded");
            StatusCode::NO_CONTENT
        })
        .map_err(|e| handle_service_error(e, &state.env, "delete_user"))
}
