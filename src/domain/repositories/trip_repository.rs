//! Repository trait for trip data access.

use crate::domain::entities::{NewTrip, TripWithOwner};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for trips.
///
/// Reads return trips joined with their owner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTripRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Creates a new trip. The owner must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Reference`] if the owner was removed concurrently.
    /// Returns [`AppError::Store`] on database errors.
    async fn create(&self, new_trip: NewTrip) -> Result<TripWithOwner, AppError>;

    /// Finds a trip by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<TripWithOwner>, AppError>;

    /// Lists all trips ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list(&self) -> Result<Vec<TripWithOwner>, AppError>;

    /// Lists the trips of one user ordered by start date, then id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<TripWithOwner>, AppError>;

    /// Returns true if a trip with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
