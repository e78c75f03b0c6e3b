//! Resource route configuration.
//!
//! A pure dispatch table: method + path template to handler.

use crate::api::handlers::{
    create_itinerary_handler, create_trip_handler, create_user_handler,
    delete_itinerary_handler, get_itinerary_handler, get_trip_handler,
    get_user_by_email_handler, get_user_handler, list_itineraries_by_trip_handler,
    list_itineraries_handler, list_trips_by_user_handler, list_trips_handler,
    list_users_handler, search_users_by_name_handler, update_itinerary_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET    /users`                       - List users
/// - `POST   /users`                       - Create a user
/// - `GET    /users/{id}`                  - User by id
/// - `GET    /users/email/{email}`         - User by exact email
/// - `GET    /users/name/{name}`           - Users whose name contains `name`
/// - `GET    /trips`                       - List trips with owners
/// - `POST   /trips`                       - Create a trip
/// - `GET    /trips/{id}`                  - Trip with owner and itineraries
/// - `GET    /trips/user/{user_id}`        - Trips of one user
/// - `GET    /itineraries`                 - List itinerary entries
/// - `POST   /itineraries`                 - Create an entry
/// - `GET    /itineraries/{id}`            - Entry by id
/// - `PUT    /itineraries/{id}`            - Partially update an entry
/// - `DELETE /itineraries/{id}`            - Delete an entry
/// - `GET    /itineraries/trip/{trip_id}`  - Entries of one trip
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/users/email/{email}", get(get_user_by_email_handler))
        .route("/users/name/{name}", get(search_users_by_name_handler))
        .route("/trips", get(list_trips_handler).post(create_trip_handler))
        .route("/trips/{id}", get(get_trip_handler))
        .route("/trips/user/{user_id}", get(list_trips_by_user_handler))
        .route(
            "/itineraries",
            get(list_itineraries_handler).post(create_itinerary_handler),
        )
        .route(
            "/itineraries/{id}",
            get(get_itinerary_handler)
                .put(update_itinerary_handler)
                .delete(delete_itinerary_handler),
        )
        .route(
            "/itineraries/trip/{trip_id}",
            get(list_itineraries_by_trip_handler),
        )
}
