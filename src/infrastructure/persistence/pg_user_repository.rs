//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for users.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email, r.created_at)
    }
}

/// Escapes `LIKE` metacharacters so user input matches literally.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(new_user.name)
        .bind(new_user.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(escape_like(fragment))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain() {
        assert_eq!(escape_like("ana"), "ana");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
