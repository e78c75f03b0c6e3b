//! Itinerary service: trip checks and itinerary CRUD.

use crate::domain::entities::{ItineraryPatch, ItineraryWithTrip, NewItinerary};
use crate::domain::repositories::{ItineraryRepository, TripRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for itinerary entries.
///
/// Creation verifies that the trip exists before inserting. Deletion is
/// idempotent: removing an unknown id succeeds and reports that nothing was
/// removed.
pub struct ItineraryService<I: ItineraryRepository, T: TripRepository> {
    itinerary_repository: Arc<I>,
    trip_repository: Arc<T>,
}

impl<I: ItineraryRepository, T: TripRepository> ItineraryService<I, T> {
    /// Creates a new itinerary service.
    pub fn new(itinerary_repository: Arc<I>, trip_repository: Arc<T>) -> Self {
        Self {
            itinerary_repository,
            trip_repository,
        }
    }

    /// Lists all entries ordered by trip, day and start time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_itineraries(&self) -> Result<Vec<ItineraryWithTrip>, AppError> {
        self.itinerary_repository.list().await
    }

    /// Creates an entry for an existing trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Reference`] if `trip_id` does not resolve to a trip.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn create_itinerary(
        &self,
        new_itinerary: NewItinerary,
    ) -> Result<ItineraryWithTrip, AppError> {
        if !self.trip_repository.exists(new_itinerary.trip_id).await? {
            return Err(AppError::invalid_reference(
                "Invalid trip_id - trip does not exist",
                json!({ "trip_id": new_itinerary.trip_id }),
            ));
        }

        self.itinerary_repository.create(new_itinerary).await
    }

    /// Retrieves an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_itinerary(&self, id: i64) -> Result<ItineraryWithTrip, AppError> {
        self.itinerary_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| itinerary_not_found(id))
    }

    /// Lists the entries of one trip ordered by day, then start time.
    /// An unknown trip yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_itineraries_by_trip(
        &self,
        trip_id: i64,
    ) -> Result<Vec<ItineraryWithTrip>, AppError> {
        self.itinerary_repository.list_by_trip(trip_id).await
    }

    /// Applies a partial update. An empty patch returns the entry unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn update_itinerary(
        &self,
        id: i64,
        patch: ItineraryPatch,
    ) -> Result<ItineraryWithTrip, AppError> {
        if patch.is_empty() {
            return self.get_itinerary(id).await;
        }

        self.itinerary_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| itinerary_not_found(id))
    }

    /// Deletes an entry. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn delete_itinerary(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.itinerary_repository.delete(id).await?;

        if !deleted {
            tracing::debug!(id, "Delete matched no itinerary");
        }

        Ok(deleted)
    }
}

fn itinerary_not_found(id: i64) -> AppError {
    AppError::not_found("Itinerary not found", json!({ "id": id }))
}
