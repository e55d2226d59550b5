use axum::{extract::State, http::StatusCode, Json};
use user_lib::entities::UserInput;
use crate::error::{ApiError, handle_service_error};
use crate::extract::ValidatedJson;
use crate::methods::entities::{CreateUserRequest, UserResponse};
use crate::state::AppState;
use crate::methods::routes::USERS_PATH;

#[utoipa::path(
    post,
    path = USERS_PATH,
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Missing field or malformed email"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let input = UserInput::try_from(payload)?;

    state.user_service
        .create_user(input)
        .await
        .map(|user| (StatusCode::CREATED, Json(UserResponse::from(user))))
        .map_err(|e| handle_service_error(e, &state.env, "create_user"))
}
