//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ItineraryService, TripService, UserService};
use crate::infrastructure::persistence::{
    PgItineraryRepository, PgTripRepository, PgUserRepository,
};

pub type PgUserService = UserService<PgUserRepository>;
pub type PgTripService = TripService<PgTripRepository, PgUserRepository, PgItineraryRepository>;
pub type PgItineraryService = ItineraryService<PgItineraryRepository, PgTripRepository>;

/// Services and the pool, cloned cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<PgUserService>,
    pub trip_service: Arc<PgTripService>,
    pub itinerary_service: Arc<PgItineraryService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services around one connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let trip_repository = Arc::new(PgTripRepository::new(pool.clone()));
        let itinerary_repository = Arc::new(PgItineraryRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            trip_service: Arc::new(TripService::new(
                trip_repository.clone(),
                user_repository,
                itinerary_repository.clone(),
            )),
            itinerary_service: Arc::new(ItineraryService::new(
                itinerary_repository,
                trip_repository,
            )),
            db: pool,
        }
    }
}
