//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating and looking up users.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users ordered by id. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        match self.repository.create(new_user).await {
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Email already exists",
                json!({ "field": "email" }),
            )),
            other => other,
        }
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Retrieves a user by exact email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))
    }

    /// Finds users whose name contains `fragment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing matches.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn search_users_by_name(&self, fragment: &str) -> Result<Vec<User>, AppError> {
        let users = self.repository.search_by_name(fragment).await?;

        if users.is_empty() {
            return Err(AppError::not_found(
                "No users found with this name",
                json!({ "name": fragment }),
            ));
        }

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn create_test_user(id: i64, name: &str, email: &str) -> User {
        User::new(id, name.to_string(), email.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|u| u.name == "Ana" && u.email == "ana@x.com")
            .times(1)
            .returning(|u| Ok(create_test_user(1, &u.name, &u.email)));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(NewUser {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ana@x.com");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "field": "email" }),
            ))
        });

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(NewUser {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
            })
            .await;

        match result.unwrap_err() {
            AppError::Conflict { message, .. } => assert_eq!(message, "Email already exists"),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "ana@x.com")
            .times(1)
            .returning(|_| Ok(Some(create_test_user(1, "Ana", "ana@x.com"))));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.get_user_by_email("ana@x.com").await.unwrap();

        assert_eq!(user.name, "Ana");
    }

    #[tokio::test]
    async fn test_search_by_name_empty_is_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_search_by_name()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.search_users_by_name("zed").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_by_name_returns_all_matches() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_search_by_name().times(1).returning(|_| {
            Ok(vec![
                create_test_user(1, "Ana", "ana@x.com"),
                create_test_user(2, "Anabel", "anabel@x.com"),
            ])
        });

        let service = UserService::new(Arc::new(mock_repo));

        let users = service.search_users_by_name("ana").await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = UserService::new(Arc::new(mock_repo));

        let users = service.list_users().await.unwrap();

        assert!(users.is_empty());
    }
}
