use serde::{Deserialize, Serialize};
use user_lib::entities::{User, UserInput};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "email is required"),
        email(message = "email must look like local@domain")
    )]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

/// Full replacement of a user's mutable fields; all three are required.
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "email is required"),
        email(message = "email must look like local@domain")
    )]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

fn to_input(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<UserInput, ApiError> {
    Ok(UserInput {
        name: name.ok_or_else(|| ApiError::missing_field("name"))?,
        email: email.ok_or_else(|| ApiError::missing_field("email"))?,
        password: password.ok_or_else(|| ApiError::missing_field("password"))?,
    })
}

impl TryFrom<CreateUserRequest> for UserInput {
    type Error = ApiError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        to_input(request.name, request.email, request.password)
    }
}

impl TryFrom<UpdateUserRequest> for UserInput {
    type Error = ApiError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        to_input(request.name, request.email, request.password)
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}
