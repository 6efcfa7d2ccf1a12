use async_trait::async_trait;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::Post;
use crate::post::models::PostLike;
use crate::post::models::PostSorting;
use crate::post::models::PostWithLikes;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post authored by `user_id`.
    async fn create_post(&self, user_id: i64, body: String) -> Result<Post, PostError>;

    /// List all posts with like counts, in the requested order.
    async fn list_posts(&self, sorting: PostSorting) -> Result<Vec<PostWithLikes>, PostError>;

    /// Retrieve a post and all its comments.
    ///
    /// # Errors
    /// * `PostNotFound` - No post with this id
    async fn post_with_comments(&self, post_id: i64) -> Result<(Post, Vec<Comment>), PostError>;

    /// Comment on an existing post.
    ///
    /// # Errors
    /// * `PostNotFound` - No post with this id
    async fn create_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: String,
    ) -> Result<Comment, PostError>;

    /// List the comments on a post.
    async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, PostError>;

    /// Like an existing post.
    ///
    /// # Errors
    /// * `PostNotFound` - No post with this id
    async fn like_post(&self, user_id: i64, post_id: i64) -> Result<PostLike, PostError>;
}

/// Persistence operations for posts, comments, and likes.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn insert_post(&self, user_id: i64, body: &str) -> Result<Post, PostError>;

    async fn find_post(&self, post_id: i64) -> Result<Option<Post>, PostError>;

    async fn list_posts(&self, sorting: PostSorting) -> Result<Vec<PostWithLikes>, PostError>;

    async fn insert_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: &str,
    ) -> Result<Comment, PostError>;

    async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, PostError>;

    async fn insert_like(&self, user_id: i64, post_id: i64) -> Result<PostLike, PostError>;
}
