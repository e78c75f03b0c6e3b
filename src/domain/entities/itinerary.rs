//! Itinerary entity: one activity on one day of a trip.

use chrono::{DateTime, NaiveTime, Utc};

use super::trip::TripSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
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

/// Itinerary joined with its trip and the trip owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryWithTrip {
    pub itinerary: Itinerary,
    pub trip: TripSummary,
}

/// Input data for creating a new itinerary entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItinerary {
    pub trip_id: i64,
    pub day_number: i32,
    pub activity: String,
    pub location: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

/// Partial update for an existing itinerary entry.
///
/// `None` fields are left unchanged. For the nullable columns,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryPatch {
    pub day_number: Option<i32>,
    pub activity: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<Option<NaiveTime>>,
    pub end_time: Option<Option<NaiveTime>>,
    pub notes: Option<Option<String>>,
}

impl ItineraryPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.day_number.is_none()
            && self.activity.is_none()
            && self.location.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.notes.is_none()
    }
}
