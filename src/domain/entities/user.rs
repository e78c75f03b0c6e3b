//! User entity.

use chrono::{DateTime, Utc};

/// A registered user. Users own trips.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    /// Returns the identifying subset embedded in trip and itinerary views.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Owner data joined onto trips and itineraries.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
