use axum::{
    extract::{Path, State},
    Json,
};
use user_lib::entities::UserInput;
use crate::error::{ApiError, handle_service_error};
use crate::extract::ValidatedJson;
use crate::methods::entities::{UpdateUserRequest, UserResponse};
use crate::methods::parse_user_id;
use crate::state::AppState;
use crate::methods::routes::USERS_BY_ID_PATH;

#[utoipa::path(
    patch,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid user ID, missing field or malformed email"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&id)?;
    let input = UserInput::try_from(payload)?;

    state.user_service
        .update_user(user_id, input)
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "update_user"))
}
