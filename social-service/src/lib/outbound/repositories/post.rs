use async_trait::async_trait;
use sqlx::PgPool;

use crate::post::errors::PostError;
use crate::post::models::Comment;
use crate::post::models::Post;
use crate::post::models::PostLike;
use crate::post::models::PostSorting;
use crate::post::models::PostWithLikes;
use crate::post::ports::PostRepository;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert_post(&self, user_id: i64, body: &str) -> Result<Post, PostError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO posts (user_id, body)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(Post {
            id,
            user_id,
            body: body.to_string(),
        })
    }

    async fn find_post(&self, post_id: i64) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, (i64, i64, String)>(
            r#"
            SELECT id, user_id, body
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(row.map(|(id, user_id, body)| Post { id, user_id, body }))
    }

    async fn list_posts(&self, sorting: PostSorting) -> Result<Vec<PostWithLikes>, PostError> {
        let order_by = match sorting {
            PostSorting::New => "p.id DESC",
            PostSorting::Old => "p.id ASC",
            PostSorting::MostLikes => "likes DESC, p.id DESC",
        };

        // order_by comes from the exhaustive match above, never from input
        let query = format!(
            r#"
            SELECT p.id, p.user_id, p.body, COUNT(l.id) AS likes
            FROM posts p
            LEFT JOIN likes l ON l.post_id = p.id
            GROUP BY p.id
            ORDER BY {order_by}
            "#
        );

        let rows = sqlx::query_as::<_, (i64, i64, String, i64)>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, user_id, body, likes)| PostWithLikes {
                id,
                user_id,
                body,
                likes,
            })
            .collect())
    }

    async fn insert_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: &str,
    ) -> Result<Comment, PostError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO comments (post_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(Comment {
            id,
            post_id,
            user_id,
            body: body.to_string(),
        })
    }

    async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, PostError> {
        let rows = sqlx::query_as::<_, (i64, i64, i64, String)>(
            r#"
            SELECT id, post_id, user_id, body
            FROM comments
            WHERE post_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, post_id, user_id, body)| Comment {
                id,
                post_id,
                user_id,
                body,
            })
            .collect())
    }

    async fn insert_like(&self, user_id: i64, post_id: i64) -> Result<PostLike, PostError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO likes (post_id, user_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(PostLike {
            id,
            post_id,
            user_id,
        })
    }
}
