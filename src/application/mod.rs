//! Application layer services.
//!
//! Services consume repository traits, enforce reference checks, and translate
//! absent rows into [`crate::error::AppError::NotFound`]. Handlers call services,
//! never repositories.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User creation and lookups
//! - [`services::trip_service::TripService`] - Trip creation (owner check) and reads
//! - [`services::itinerary_service::ItineraryService`] - Itinerary CRUD (trip check)

pub mod services;
