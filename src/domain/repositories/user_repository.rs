//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Store`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Case-insensitive substring search on the user name, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, AppError>;

    /// Lists all users ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Returns true if a user with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
