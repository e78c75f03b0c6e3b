//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserSummary};
use crate::error::AppError;

/// Request body for `POST /users`.
///
/// Fields are optional at the serde level so that a missing field surfaces as a
/// validation error with the standard error body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(name), Some(email)) = (req.name, req.email) else {
            return Err(AppError::missing_fields(&["name", "email"]));
        };

        Ok(NewUser { name, email })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Owner embedded in trip and itinerary responses.
#[derive(Debug, Serialize)]
pub struct UserSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request_narrows() {
        let new_user =
            NewUser::try_from(parse(json!({ "name": "Ana", "email": "ana@x.com" }))).unwrap();

        assert_eq!(new_user.name, "Ana");
        assert_eq!(new_user.email, "ana@x.com");
    }

    #[test]
    fn test_missing_email_rejected() {
        let err = NewUser::try_from(parse(json!({ "name": "Ana" }))).unwrap_err();

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details, json!({ "fields": ["email"] }));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = NewUser::try_from(parse(json!({ "name": "", "email": "ana@x.com" }))).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }
}
