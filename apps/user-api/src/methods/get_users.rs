use axum::{extract::State, Json};
use crate::error::{ApiError, handle_service_error};
use crate::methods::entities::UserResponse;
use crate::state::AppState;
use crate::methods::routes::USERS_PATH;

#[utoipa::path(
    get,
    path = USERS_PATH,
    tag = "users",
    responses(
        (status = 200, description = "Every known user, possibly empty", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    state.user_service
        .get_users()
        .await
        .map(|users| Json(users.into_iter().map(UserResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_users"))
}
