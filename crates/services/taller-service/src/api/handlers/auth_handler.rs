//! Operator registration and login.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::UserResponse;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::service::TokenResponse;

/// Operator registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    #[schema(example = "Taller Admin")]
    pub name: String,
    #[validate(email(message = "The email field must be a valid email address."))]
    #[schema(example = "admin@taller.test")]
    pub email: String,
    #[validate(length(min = 8, message = "The password field must be at least 8 characters."))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Operator login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "The email field must be a valid email address."))]
    #[schema(example = "admin@taller.test")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new operator
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Operator registered", body = UserResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login and get a JWT
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.auth.login(payload.email, payload.password).await?;

    Ok(Json(token))
}
