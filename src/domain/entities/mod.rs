//! Core domain entities.
//!
//! Entities are plain data structures without persistence or transport concerns.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user
//! - [`Trip`] - A trip owned by a user
//! - [`Itinerary`] - One scheduled activity on a day of a trip
//!
//! Creation inputs use separate `New*` structs; [`ItineraryPatch`] carries
//! partial updates. Joined read models (`TripWithOwner`, `TripDetails`,
//! `ItineraryWithTrip`) bundle an entity with the related rows returned by
//! shallow joins.

pub mod itinerary;
pub mod trip;
pub mod user;

pub use itinerary::{Itinerary, ItineraryPatch, ItineraryWithTrip, NewItinerary};
pub use trip::{NewTrip, Trip, TripDetails, TripSummary, TripWithOwner};
pub use user::{NewUser, User, UserSummary};
