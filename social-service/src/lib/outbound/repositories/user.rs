use async_trait::async_trait;
use sqlx::PgPool;

use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_user(row: (i64, String, String, bool)) -> Result<User, UserError> {
    let (id, email, password_hash, confirmed) = row;
    Ok(User {
        id,
        email: EmailAddress::new(email)?,
        password_hash,
        confirmed,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        tracing::debug!(email, "Fetching user from database");

        let row = sqlx::query_as::<_, (i64, String, String, bool)>(
            r#"
            SELECT id, email, password_hash, confirmed
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(into_user).transpose()
    }

    async fn insert(&self, email: &EmailAddress, password_hash: &str) -> Result<i64, UserError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO users (email, password_hash, confirmed)
            VALUES ($1, $2, FALSE)
            RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A registration race loses here on the unique email constraint
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::EmailAlreadyRegistered;
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(id)
    }

    async fn set_confirmed(&self, email: &str) -> Result<(), UserError> {
        sqlx::query(
            r#"
            UPDATE users
            SET confirmed = TRUE
            WHERE email = $1
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
