//! Handlers for itinerary endpoints (full CRUD).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::itinerary::{
    CreateItineraryRequest, DeleteItineraryResponse, ItineraryResponse, UpdateItineraryRequest,
};
use crate::api::validation::parse_id;
use crate::domain::entities::{ItineraryPatch, NewItinerary};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all itinerary entries ordered by trip, day and start time.
///
/// # Endpoint
///
/// `GET /itineraries`
pub async fn list_itineraries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let itineraries = state.itinerary_service.list_itineraries().await?;

    Ok(Json(
        itineraries
            .into_iter()
            .map(ItineraryResponse::from)
            .collect(),
    ))
}

/// Creates an itinerary entry for an existing trip.
///
/// # Endpoint
///
/// `POST /itineraries`
///
/// # Request Body
///
/// ```json
/// {
///   "trip_id": 1,
///   "day_number": 1,
///   "activity": "Tour",
///   "location": "Colosseum",
///   "start_time": "09:00:00",   // optional
///   "end_time": "11:00:00",     // optional
///   "notes": "Book ahead"       // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a required field is missing or the trip does not exist.
pub async fn create_itinerary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItineraryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItineraryResponse>), AppError> {
    let Json(payload) = payload?;
    let new_itinerary = NewItinerary::try_from(payload)?;

    let itinerary = state
        .itinerary_service
        .create_itinerary(new_itinerary)
        .await?;

    Ok((StatusCode::CREATED, Json(itinerary.into())))
}

/// Retrieves an itinerary entry by id.
///
/// # Endpoint
///
/// `GET /itineraries/{id}`
///
/// # Errors
///
/// Returns 400 if the id is malformed.
/// Returns 404 if the entry does not exist.
pub async fn get_itinerary_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let Path(id) = path?;
    let id = parse_id(&id, "itinerary")?;

    let itinerary = state.itinerary_service.get_itinerary(id).await?;

    Ok(Json(itinerary.into()))
}

/// Partially updates an itinerary entry.
///
/// # Endpoint
///
/// `PUT /itineraries/{id}`
///
/// # Request Body
///
/// Any subset of `day_number`, `activity`, `location`, `start_time`,
/// `end_time`, `notes`. Omitted fields are unchanged; `null` clears the
/// optional ones.
///
/// # Errors
///
/// Returns 400 if the id is malformed or a supplied field is invalid.
/// Returns 404 if the entry does not exist.
pub async fn update_itinerary_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateItineraryRequest>, JsonRejection>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let Path(id) = path?;
    let id = parse_id(&id, "itinerary")?;
    let Json(payload) = payload?;
    let patch = ItineraryPatch::try_from(payload)?;

    let itinerary = state.itinerary_service.update_itinerary(id, patch).await?;

    Ok(Json(itinerary.into()))
}

/// Deletes an itinerary entry.
///
/// # Endpoint
///
/// `DELETE /itineraries/{id}`
///
/// # Behavior
///
/// Always answers 200 for a well-formed id. `deleted` is `false` when no entry
/// had this id.
///
/// # Errors
///
/// Returns 400 if the id is malformed.
pub async fn delete_itinerary_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteItineraryResponse>, AppError> {
    let Path(id) = path?;
    let id = parse_id(&id, "itinerary")?;

    let deleted = state.itinerary_service.delete_itinerary(id).await?;

    Ok(Json(DeleteItineraryResponse {
        message: "Itinerary deleted successfully".to_string(),
        id,
        deleted,
    }))
}

/// Lists the entries of one trip ordered by day, then start time.
///
/// # Endpoint
///
/// `GET /itineraries/trip/{trip_id}`
///
/// # Errors
///
/// Returns 400 if the trip id is malformed. An unknown trip yields `[]`.
pub async fn list_itineraries_by_trip_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let Path(trip_id) = path?;
    let trip_id = parse_id(&trip_id, "trip")?;

    let itineraries = state
        .itinerary_service
        .list_itineraries_by_trip(trip_id)
        .await?;

    Ok(Json(
        itineraries
            .into_iter()
            .map(ItineraryResponse::from)
            .collect(),
    ))
}
