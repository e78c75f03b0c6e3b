//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `validator::Validate` and narrow into domain inputs via
//! `TryFrom`. Response DTOs are built from domain entities via `From`.

pub mod health;
pub mod itinerary;
pub mod trip;
pub mod user;
