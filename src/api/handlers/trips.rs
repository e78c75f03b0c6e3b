//! Handlers for trip endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::trip::{CreateTripRequest, TripDetailResponse, TripResponse};
use crate::api::validation::parse_id;
use crate::domain::entities::NewTrip;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all trips with their owners, ordered by id.
///
/// # Endpoint
///
/// `GET /trips`
pub async fn list_trips_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let trips = state.trip_service.list_trips().await?;

    Ok(Json(trips.into_iter().map(TripResponse::from).collect()))
}

/// Creates a trip for an existing user.
///
/// # Endpoint
///
/// `POST /trips`
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 1,
///   "destination": "Rome",
///   "start_date": "2025-01-01",
///   "end_date": "2025-01-05",
///   "description": "Winter break"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a required field is missing or the user does not exist.
pub async fn create_trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TripResponse>), AppError> {
    let Json(payload) = payload?;
    let new_trip = NewTrip::try_from(payload)?;

    let trip = state.trip_service.create_trip(new_trip).await?;

    Ok((StatusCode::CREATED, Json(trip.into())))
}

/// Retrieves a trip with its owner and itinerary entries.
///
/// # Endpoint
///
/// `GET /trips/{id}`
///
/// # Errors
///
/// Returns 400 if the id is malformed.
/// Returns 404 if the trip does not exist.
pub async fn get_trip_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<TripDetailResponse>, AppError> {
    let Path(id) = path?;
    let id = parse_id(&id, "trip")?;

    let details = state.trip_service.get_trip(id).await?;

    Ok(Json(details.into()))
}

/// Lists the trips of one user ordered by start date.
///
/// # Endpoint
///
/// `GET /trips/user/{user_id}`
///
/// # Errors
///
/// Returns 400 if the user id is malformed. An unknown user yields `[]`.
pub async fn list_trips_by_user_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let Path(user_id) = path?;
    let user_id = parse_id(&user_id, "user")?;

    let trips = state.trip_service.list_trips_by_user(user_id).await?;

    Ok(Json(trips.into_iter().map(TripResponse::from).collect()))
}
