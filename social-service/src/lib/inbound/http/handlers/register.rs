use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let email = EmailAddress::new(body.email).map_err(UserError::from)?;

    let registered = state
        .user_service
        .register(RegisterUserCommand::new(email, body.password))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            detail: "User created. Please confirm your email!".to_string(),
            confirmation: registered.confirmation_url,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub detail: String,
    /// Link the user must follow to confirm the address.
    pub confirmation: String,
}
