//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every statement.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and lookups
//! - [`PgTripRepository`] - Trips joined with their owner
//! - [`PgItineraryRepository`] - Itinerary CRUD joined with trip and owner

pub mod pg_itinerary_repository;
pub mod pg_trip_repository;
pub mod pg_user_repository;

pub use pg_itinerary_repository::PgItineraryRepository;
pub use pg_trip_repository::PgTripRepository;
pub use pg_user_repository::PgUserRepository;
