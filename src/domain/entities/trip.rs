//! Trip entity and its joined views.

use chrono::{DateTime, NaiveDate, Utc};

use super::itinerary::Itinerary;
use super::user::UserSummary;

/// A trip owned by a user.
///
/// `end_date` is expected to be on or after `start_date`, but the ordering is
/// not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trip joined with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TripWithOwner {
    pub trip: Trip,
    pub owner: UserSummary,
}

/// Trip with owner and its itinerary entries, as returned by a single-trip lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub trip: TripWithOwner,
    pub itineraries: Vec<Itinerary>,
}

/// Trip data embedded in itinerary views.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner: UserSummary,
}

/// Input data for creating a new trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub user_id: i64,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}
