use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::post::models::PostSorting;
use crate::post::models::PostWithLikes;

pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> Result<ApiSuccess<Vec<PostWithLikesData>>, ApiError> {
    let sorting = match params.sorting.as_deref() {
        None | Some("new") => PostSorting::New,
        Some("old") => PostSorting::Old,
        Some("most_likes") => PostSorting::MostLikes,
        Some(other) => {
            return Err(ApiError::UnprocessableEntity(format!(
                "Invalid sorting option: '{other}'"
            )))
        }
    };

    let posts = state.post_service.list_posts(sorting).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        posts.iter().map(PostWithLikesData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPostsParams {
    pub sorting: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithLikesData {
    pub id: i64,
    pub user_id: i64,
    pub body: String,
    pub likes: i64,
}

impl From<&PostWithLikes> for PostWithLikesData {
    fn from(post: &PostWithLikes) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            body: post.body.clone(),
            likes: post.likes,
        }
    }
}
