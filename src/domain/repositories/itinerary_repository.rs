//! Repository trait for itinerary data access.

use crate::domain::entities::{Itinerary, ItineraryPatch, ItineraryWithTrip, NewItinerary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for itinerary entries.
///
/// Entries of one trip are always returned ordered by `day_number`, then
/// `start_time` (entries without a start time last), then id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgItineraryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_itinerary.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Creates a new itinerary entry. The trip must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Reference`] if the trip was removed concurrently.
    /// Returns [`AppError::Store`] on database errors.
    async fn create(&self, new_itinerary: NewItinerary) -> Result<ItineraryWithTrip, AppError>;

    /// Finds an itinerary entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ItineraryWithTrip>, AppError>;

    /// Lists all entries ordered by trip, day, start time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list(&self) -> Result<Vec<ItineraryWithTrip>, AppError>;

    /// Lists the entries of one trip with their trip data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_trip(&self, trip_id: i64) -> Result<Vec<ItineraryWithTrip>, AppError>;

    /// Lists the bare entries of one trip, for nesting under the trip itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_entries_for_trip(&self, trip_id: i64) -> Result<Vec<Itinerary>, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` if no entry has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn update(
        &self,
        id: i64,
        patch: ItineraryPatch,
    ) -> Result<Option<ItineraryWithTrip>, AppError>;

    /// Deletes an entry.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
