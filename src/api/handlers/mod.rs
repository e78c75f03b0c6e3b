//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod health;
pub mod itineraries;
pub mod trips;
pub mod users;

pub use health::health_handler;
pub use itineraries::{
    create_itinerary_handler, delete_itinerary_handler, get_itinerary_handler,
    list_itineraries_by_trip_handler, list_itineraries_handler, update_itinerary_handler,
};
pub use trips::{
    create_trip_handler, get_trip_handler, list_trips_by_user_handler, list_trips_handler,
};
pub use users::{
    create_user_handler, get_user_by_email_handler, get_user_handler, list_users_handler,
    search_users_by_name_handler,
};
