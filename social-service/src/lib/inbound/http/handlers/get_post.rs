use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::create_post::PostData;
use super::list_comments::CommentData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_post_with_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<ApiSuccess<PostWithCommentsData>, ApiError> {
    let (post, comments) = state.post_service.post_with_comments(post_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PostWithCommentsData {
            post: (&post).into(),
            comments: comments.iter().map(CommentData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithCommentsData {
    pub post: PostData,
    pub comments: Vec<CommentData>,
}
