//! Trip service: owner checks and trip reads.

use crate::domain::entities::{NewTrip, TripDetails, TripWithOwner};
use crate::domain::repositories::{ItineraryRepository, TripRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating and reading trips.
///
/// Trip creation verifies that the owner exists before inserting.
pub struct TripService<T: TripRepository, U: UserRepository, I: ItineraryRepository> {
    trip_repository: Arc<T>,
    user_repository: Arc<U>,
    itinerary_repository: Arc<I>,
}

impl<T: TripRepository, U: UserRepository, I: ItineraryRepository> TripService<T, U, I> {
    /// Creates a new trip service.
    pub fn new(
        trip_repository: Arc<T>,
        user_repository: Arc<U>,
        itinerary_repository: Arc<I>,
    ) -> Self {
        Self {
            trip_repository,
            user_repository,
            itinerary_repository,
        }
    }

    /// Lists all trips with their owners, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_trips(&self) -> Result<Vec<TripWithOwner>, AppError> {
        self.trip_repository.list().await
    }

    /// Creates a trip for an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Reference`] if `user_id` does not resolve to a user.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn create_trip(&self, new_trip: NewTrip) -> Result<TripWithOwner, AppError> {
        if !self.user_repository.exists(new_trip.user_id).await? {
            return Err(AppError::invalid_reference(
                "Invalid user_id - user does not exist",
                json!({ "user_id": new_trip.user_id }),
            ));
        }

        self.trip_repository.create(new_trip).await
    }

    /// Retrieves a trip with its owner and itinerary entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the trip does not exist.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_trip(&self, id: i64) -> Result<TripDetails, AppError> {
        let trip = self
            .trip_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Trip not found", json!({ "id": id })))?;

        let itineraries = self.itinerary_repository.list_entries_for_trip(id).await?;

        Ok(TripDetails { trip, itineraries })
    }

    /// Lists the trips of one user. An unknown user yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_trips_by_user(&self, user_id: i64) -> Result<Vec<TripWithOwner>, AppError> {
        self.trip_repository.list_by_user(user_id).await
    }
}
