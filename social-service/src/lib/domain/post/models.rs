/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub body: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub body: String,
}

/// A user's like on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLike {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
}

/// A post together with its like count, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithLikes {
    pub id: i64,
    pub user_id: i64,
    pub body: String,
    pub likes: i64,
}

/// Ordering for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSorting {
    /// Newest first (default).
    #[default]
    New,
    /// Oldest first.
    Old,
    /// Most liked first.
    MostLikes,
}
