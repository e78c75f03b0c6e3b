//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Users and lookups by id, email, name
//! - [`TripRepository`] - Trips joined with their owner
//! - [`ItineraryRepository`] - Itinerary CRUD
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod itinerary_repository;
pub mod trip_repository;
pub mod user_repository;

pub use itinerary_repository::ItineraryRepository;
pub use trip_repository::TripRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use itinerary_repository::MockItineraryRepository;
#[cfg(test)]
pub use trip_repository::MockTripRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
