//! DTOs for itinerary endpoints.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trip::TripSummaryResponse;
use crate::domain::entities::{Itinerary, ItineraryPatch, ItineraryWithTrip, NewItinerary};
use crate::error::AppError;

/// Request body for `POST /itineraries`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItineraryRequest {
    #[validate(required)]
    pub trip_id: Option<i64>,

    #[validate(required, range(min = 1))]
    pub day_number: Option<i32>,

    #[validate(required, length(min = 1))]
    pub activity: Option<String>,

    #[validate(required, length(min = 1))]
    pub location: Option<String>,

    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl TryFrom<CreateItineraryRequest> for NewItinerary {
    type Error = AppError;

    fn try_from(req: CreateItineraryRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(trip_id), Some(day_number), Some(activity), Some(location)) =
            (req.trip_id, req.day_number, req.activity, req.location)
        else {
            return Err(AppError::missing_fields(&[
                "trip_id",
                "day_number",
                "activity",
                "location",
            ]));
        };

        Ok(NewItinerary {
            trip_id,
            day_number,
            activity,
            location,
            start_time: req.start_time,
            end_time: req.end_time,
            notes: req.notes,
        })
    }
}

/// Request body for `PUT /itineraries/{id}`.
///
/// All fields are optional; only provided fields change.
///
/// # Nullable fields
///
/// `start_time`, `end_time` and `notes` distinguish absent from `null`:
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **Value** → set it
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateItineraryRequest {
    #[validate(range(min = 1))]
    pub day_number: Option<i32>,

    #[validate(length(min = 1))]
    pub activity: Option<String>,

    #[validate(length(min = 1))]
    pub location: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub start_time: Option<Option<NaiveTime>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub end_time: Option<Option<NaiveTime>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Option<Option<String>>,
}

impl TryFrom<UpdateItineraryRequest> for ItineraryPatch {
    type Error = AppError;

    fn try_from(req: UpdateItineraryRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(ItineraryPatch {
            day_number: req.day_number,
            activity: req.activity,
            location: req.location,
            start_time: req.start_time,
            end_time: req.end_time,
            notes: req.notes,
        })
    }
}

/// Bare itinerary entry, as nested under a trip.
#[derive(Debug, Serialize)]
pub struct ItineraryEntryResponse {
    pub id: i64,
    pub trip_id: i64,
    pub day_number: i32,
    pub activity: String,
    pub location: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Itinerary> for ItineraryEntryResponse {
    fn from(i: Itinerary) -> Self {
        Self {
            id: i.id,
            trip_id: i.trip_id,
            day_number: i.day_number,
            activity: i.activity,
            location: i.location,
            start_time: i.start_time,
            end_time: i.end_time,
            notes: i.notes,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

/// Itinerary entry with its trip (and the trip owner) embedded as `trip`.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    #[serde(flatten)]
    pub entry: ItineraryEntryResponse,
    pub trip: TripSummaryResponse,
}

impl From<ItineraryWithTrip> for ItineraryResponse {
    fn from(i: ItineraryWithTrip) -> Self {
        Self {
            entry: i.itinerary.into(),
            trip: i.trip.into(),
        }
    }
}

/// Response for `DELETE /itineraries/{id}`.
///
/// The shape is the same whether or not a row was removed; `deleted` tells the
/// two apart.
#[derive(Debug, Serialize)]
pub struct DeleteItineraryResponse {
    pub message: String,
    pub id: i64,
    pub deleted: bool,
}
