//! Business logic services for the application layer.

pub mod itinerary_service;
pub mod trip_service;
pub mod user_service;

pub use itinerary_service::ItineraryService;
pub use trip_service::TripService;
pub use user_service::UserService;
