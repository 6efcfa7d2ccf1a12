use std::sync::Arc;

use async_trait::async_trait;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::Post;
use crate::post::models::PostLike;
use crate::post::models::PostSorting;
use crate::post::models::PostWithLikes;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;

/// Domain service for posts, comments, and likes.
///
/// Thin orchestration over the repository; callers are expected to have
/// been authenticated already for the mutating operations.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn require_post(&self, post_id: i64) -> Result<Post, PostError> {
        self.repository
            .find_post(post_id)
            .await?
            .ok_or(PostError::PostNotFound(post_id))
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, user_id: i64, body: String) -> Result<Post, PostError> {
        tracing::info!(user_id, "Creating post");
        self.repository.insert_post(user_id, &body).await
    }

    async fn list_posts(&self, sorting: PostSorting) -> Result<Vec<PostWithLikes>, PostError> {
        tracing::info!(?sorting, "Getting all posts");
        self.repository.list_posts(sorting).await
    }

    async fn post_with_comments(&self, post_id: i64) -> Result<(Post, Vec<Comment>), PostError> {
        let post = self.require_post(post_id).await?;
        let comments = self.repository.comments_on_post(post_id).await?;
        Ok((post, comments))
    }

    async fn create_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: String,
    ) -> Result<Comment, PostError> {
        tracing::info!(user_id, post_id, "Creating comment");
        self.require_post(post_id).await?;
        self.repository.insert_comment(user_id, post_id, &body).await
    }

    async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, PostError> {
        self.repository.comments_on_post(post_id).await
    }

    async fn like_post(&self, user_id: i64, post_id: i64) -> Result<PostLike, PostError> {
        tracing::info!(user_id, post_id, "Liking post");
        self.require_post(post_id).await?;
        self.repository.insert_like(user_id, post_id).await
    }
}
