use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use auth::TokenError;
use serde::Serialize;
use serde_json::json;

use crate::post::errors::PostError;
use crate::user::errors::UserError;

pub mod confirm_email;
pub mod create_comment;
pub mod create_post;
pub mod get_post;
pub mod like_post;
pub mod list_comments;
pub mod list_posts;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-facing error with a JSON `{"detail": ...}` body.
///
/// Unauthorized responses additionally carry `WWW-Authenticate: Bearer`,
/// the standard bearer-auth challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            // Rejected requests, not server faults
            UserError::EmailAlreadyRegistered => ApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials | UserError::UserNotFound => {
                ApiError::Unauthorized(err.to_string())
            }
            // Issuance failing is a server fault, unlike a rejected token
            UserError::Token(TokenError::EncodingFailed(_)) => {
                ApiError::InternalServerError(err.to_string())
            }
            UserError::Token(_) => {
                tracing::debug!(error = %err, "Token validation failed");
                ApiError::Unauthorized(err.to_string())
            }
            UserError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_)
            | UserError::EmailDelivery(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::PostNotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::Unauthorized("Invalid token".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_registration_conflict_is_bad_request() {
        let err = ApiError::from(UserError::EmailAlreadyRegistered);
        assert_eq!(err, ApiError::BadRequest("Email already registered".to_string()));
    }

    #[test]
    fn test_token_errors_keep_exact_details() {
        let err = ApiError::from(UserError::Token(TokenError::TokenExpired));
        assert_eq!(err, ApiError::Unauthorized("Token has expired".to_string()));

        let err = ApiError::from(UserError::Token(TokenError::InvalidToken));
        assert_eq!(err, ApiError::Unauthorized("Invalid token".to_string()));
    }

    #[test]
    fn test_token_encoding_failure_is_server_fault() {
        let err = ApiError::from(UserError::Token(TokenError::EncodingFailed(
            "key rejected".to_string(),
        )));
        assert!(matches!(err, ApiError::InternalServerError(_)));
    }
}
