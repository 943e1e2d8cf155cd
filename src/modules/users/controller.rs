use axum::http::{StatusCode, header};
use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{CreateUserDto, UserProfile};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Response body carrying a single human-readable message.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body listing violated validation constraints.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Return the authenticated user's public profile
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The authenticated user's profile", body = UserProfile),
        (status = 401, description = "Access denied", body = MessageResponse)
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(user))]
pub async fn get_current_user(AuthUser(user): AuthUser) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(UserProfile::from(user)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created, Location header set to /"),
        (status = 400, description = "Validation or uniqueness failure", body = ValidationErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1]), AppError> {
    UserService::create_user(&state.db, dto).await?;

    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
