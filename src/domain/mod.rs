//! Domain layer containing entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Users, trips, itinerary entries and their joined read models
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or SQL. Repository traits are
//! implemented in [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
