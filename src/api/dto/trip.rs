//! DTOs for trip endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::itinerary::ItineraryEntryResponse;
use super::user::UserSummaryResponse;
use crate::domain::entities::{NewTrip, TripDetails, TripSummary, TripWithOwner};
use crate::error::AppError;

/// Request body for `POST /trips`.
///
/// `end_date` is not checked against `start_date`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(required)]
    pub user_id: Option<i64>,

    #[validate(required, length(min = 1))]
    pub destination: Option<String>,

    #[validate(required)]
    pub start_date: Option<NaiveDate>,

    #[validate(required)]
    pub end_date: Option<NaiveDate>,

    pub description: Option<String>,
}

impl TryFrom<CreateTripRequest> for NewTrip {
    type Error = AppError;

    fn try_from(req: CreateTripRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(user_id), Some(destination), Some(start_date), Some(end_date)) =
            (req.user_id, req.destination, req.start_date, req.end_date)
        else {
            return Err(AppError::missing_fields(&[
                "user_id",
                "destination",
                "start_date",
                "end_date",
            ]));
        };

        Ok(NewTrip {
            user_id,
            destination,
            start_date,
            end_date,
            description: req.description,
        })
    }
}

/// Trip with its owner embedded as `user`.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: i64,
    pub user_id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: UserSummaryResponse,
}

impl From<TripWithOwner> for TripResponse {
    fn from(t: TripWithOwner) -> Self {
        Self {
            id: t.trip.id,
            user_id: t.trip.user_id,
            destination: t.trip.destination,
            start_date: t.trip.start_date,
            end_date: t.trip.end_date,
            description: t.trip.description,
            created_at: t.trip.created_at,
            user: t.owner.into(),
        }
    }
}

/// Response for `GET /trips/{id}`: the trip plus its itinerary entries.
#[derive(Debug, Serialize)]
pub struct TripDetailResponse {
    #[serde(flatten)]
    pub trip: TripResponse,
    pub itineraries: Vec<ItineraryEntryResponse>,
}

impl From<TripDetails> for TripDetailResponse {
    fn from(d: TripDetails) -> Self {
        Self {
            trip: d.trip.into(),
            itineraries: d.itineraries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trip embedded in itinerary responses.
#[derive(Debug, Serialize)]
pub struct TripSummaryResponse {
    pub id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub user: UserSummaryResponse,
}

impl From<TripSummary> for TripSummaryResponse {
    fn from(t: TripSummary) -> Self {
        Self {
            id: t.id,
            destination: t.destination,
            start_date: t.start_date,
            end_date: t.end_date,
            user: t.owner.into(),
        }
    }
}
