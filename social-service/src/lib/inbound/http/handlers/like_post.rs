use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::post::models::PostLike;

pub async fn like_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<LikePostRequestBody>,
) -> Result<ApiSuccess<PostLikeData>, ApiError> {
    state
        .post_service
        .like_post(user.id, body.post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref like| ApiSuccess::new(StatusCode::CREATED, like.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LikePostRequestBody {
    pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLikeData {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
}

impl From<&PostLike> for PostLikeData {
    fn from(like: &PostLike) -> Self {
        Self {
            id: like.id,
            post_id: like.post_id,
            user_id: like.user_id,
        }
    }
}
