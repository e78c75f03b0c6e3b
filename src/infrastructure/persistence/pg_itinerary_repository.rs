//! PostgreSQL implementation of itinerary repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{
    Itinerary, ItineraryPatch, ItineraryWithTrip, NewItinerary, TripSummary, UserSummary,
};
use crate::domain::repositories::ItineraryRepository;
use crate::error::AppError;

/// Bare itinerary columns, aliased `i`.
const ENTRY_COLUMNS: &str = r#"
    i.id, i.trip_id, i.day_number, i.activity, i.location,
    i.start_time, i.end_time, i.notes, i.created_at, i.updated_at
"#;

/// Trip and owner columns joined onto an itinerary row.
const TRIP_COLUMNS: &str = r#"
    t.user_id AS trip_user_id, t.destination AS trip_destination,
    t.start_date AS trip_start_date, t.end_date AS trip_end_date,
    u.name AS owner_name, u.email AS owner_email
"#;

const TRIP_JOINS: &str = r#"
    JOIN trips t ON t.id = i.trip_id
    JOIN users u ON u.id = t.user_id
"#;

const RETURNING_COLUMNS: &str = r#"
    id, trip_id, day_number, activity, location,
    start_time, end_time, notes, created_at, updated_at
"#;

/// PostgreSQL repository for itinerary entries.
pub struct PgItineraryRepository {
    pool: Arc<PgPool>,
}

impl PgItineraryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EntryRow {
    id: i64,
    trip_id: i64,
    day_number: i32,
    activity: String,
    location: String,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EntryRow> for Itinerary {
    fn from(r: EntryRow) -> Self {
        Itinerary {
            id: r.id,
            trip_id: r.trip_id,
            day_number: r.day_number,
            activity: r.activity,
            location: r.location,
            start_time: r.start_time,
            end_time: r.end_time,
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(FromRow)]
struct JoinedRow {
    #[sqlx(flatten)]
    entry: EntryRow,
    trip_user_id: i64,
    trip_destination: String,
    trip_start_date: NaiveDate,
    trip_end_date: NaiveDate,
    owner_name: String,
    owner_email: String,
}

impl From<JoinedRow> for ItineraryWithTrip {
    fn from(r: JoinedRow) -> Self {
        let trip = TripSummary {
            id: r.entry.trip_id,
            destination: r.trip_destination,
            start_date: r.trip_start_date,
            end_date: r.trip_end_date,
            owner: UserSummary {
                id: r.trip_user_id,
                name: r.owner_name,
                email: r.owner_email,
            },
        };

        ItineraryWithTrip {
            itinerary: r.entry.into(),
            trip,
        }
    }
}

#[async_trait]
impl ItineraryRepository for PgItineraryRepository {
    async fn create(&self, new_itinerary: NewItinerary) -> Result<ItineraryWithTrip, AppError> {
        let sql = format!(
            r#"
            WITH i AS (
                INSERT INTO itineraries
                    (trip_id, day_number, activity, location, start_time, end_time, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {RETURNING_COLUMNS}
            )
            SELECT {ENTRY_COLUMNS}, {TRIP_COLUMNS}
            FROM i
            {TRIP_JOINS}
            "#
        );

        let row = sqlx::query_as::<_, JoinedRow>(&sql)
            .bind(new_itinerary.trip_id)
            .bind(new_itinerary.day_number)
            .bind(new_itinerary.activity)
            .bind(new_itinerary.location)
            .bind(new_itinerary.start_time)
            .bind(new_itinerary.end_time)
            .bind(new_itinerary.notes)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItineraryWithTrip>, AppError> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}, {TRIP_COLUMNS}
            FROM itineraries i
            {TRIP_JOINS}
            WHERE i.id = $1
            "#
        );

        let row = sqlx::query_as::<_, JoinedRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(ItineraryWithTrip::from))
    }

    async fn list(&self) -> Result<Vec<ItineraryWithTrip>, AppError> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}, {TRIP_COLUMNS}
            FROM itineraries i
            {TRIP_JOINS}
            ORDER BY i.trip_id, i.day_number, i.start_time, i.id
            "#
        );

        let rows = sqlx::query_as::<_, JoinedRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ItineraryWithTrip::from).collect())
    }

    async fn list_by_trip(&self, trip_id: i64) -> Result<Vec<ItineraryWithTrip>, AppError> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}, {TRIP_COLUMNS}
            FROM itineraries i
            {TRIP_JOINS}
            WHERE i.trip_id = $1
            ORDER BY i.day_number, i.start_time, i.id
            "#
        );

        let rows = sqlx::query_as::<_, JoinedRow>(&sql)
            .bind(trip_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ItineraryWithTrip::from).collect())
    }

    async fn list_entries_for_trip(&self, trip_id: i64) -> Result<Vec<Itinerary>, AppError> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM itineraries i
            WHERE i.trip_id = $1
            ORDER BY i.day_number, i.start_time, i.id
            "#
        );

        let rows = sqlx::query_as::<_, EntryRow>(&sql)
            .bind(trip_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Itinerary::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        patch: ItineraryPatch,
    ) -> Result<Option<ItineraryWithTrip>, AppError> {
        let set_start_time = patch.start_time.is_some();
        let set_end_time = patch.end_time.is_some();
        let set_notes = patch.notes.is_some();

        let sql = format!(
            r#"
            WITH i AS (
                UPDATE itineraries SET
                    day_number = COALESCE($2::INTEGER, day_number),
                    activity   = COALESCE($3::TEXT, activity),
                    location   = COALESCE($4::TEXT, location),
                    start_time = CASE WHEN $5 THEN $6::TIME ELSE start_time END,
                    end_time   = CASE WHEN $7 THEN $8::TIME ELSE end_time END,
                    notes      = CASE WHEN $9 THEN $10::TEXT ELSE notes END,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {RETURNING_COLUMNS}
            )
            SELECT {ENTRY_COLUMNS}, {TRIP_COLUMNS}
            FROM i
            {TRIP_JOINS}
            "#
        );

        let row = sqlx::query_as::<_, JoinedRow>(&sql)
            .bind(id)
            .bind(patch.day_number)
            .bind(patch.activity)
            .bind(patch.location)
            .bind(set_start_time)
            .bind(patch.start_time.flatten())
            .bind(set_end_time)
            .bind(patch.end_time.flatten())
            .bind(set_notes)
            .bind(patch.notes.flatten())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(ItineraryWithTrip::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
