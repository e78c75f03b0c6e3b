//! PostgreSQL implementation of trip repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTrip, Trip, TripWithOwner, UserSummary};
use crate::domain::repositories::TripRepository;
use crate::error::AppError;

/// Trip columns plus the owner's name and email, selected from `trips t JOIN users u`.
const TRIP_PROJECTION: &str = r#"
    t.id, t.user_id, t.destination, t.start_date, t.end_date, t.description, t.created_at,
    u.name AS owner_name, u.email AS owner_email
"#;

/// PostgreSQL repository for trips.
///
/// Every read joins the owner so responses can embed it.
pub struct PgTripRepository {
    pool: Arc<PgPool>,
}

impl PgTripRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TripRow {
    id: i64,
    user_id: i64,
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<String>,
    created_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl From<TripRow> for TripWithOwner {
    fn from(r: TripRow) -> Self {
        TripWithOwner {
            owner: UserSummary {
                id: r.user_id,
                name: r.owner_name,
                email: r.owner_email,
            },
            trip: Trip {
                id: r.id,
                user_id: r.user_id,
                destination: r.destination,
                start_date: r.start_date,
                end_date: r.end_date,
                description: r.description,
                created_at: r.created_at,
            },
        }
    }
}

#[async_trait]
impl TripRepository for PgTripRepository {
    async fn create(&self, new_trip: NewTrip) -> Result<TripWithOwner, AppError> {
        let sql = format!(
            r#"
            WITH t AS (
                INSERT INTO trips (user_id, destination, start_date, end_date, description)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, user_id, destination, start_date, end_date, description, created_at
            )
            SELECT {TRIP_PROJECTION}
            FROM t
            JOIN users u ON u.id = t.user_id
            "#
        );

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(new_trip.user_id)
            .bind(new_trip.destination)
            .bind(new_trip.start_date)
            .bind(new_trip.end_date)
            .bind(new_trip.description)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TripWithOwner>, AppError> {
        let sql = format!(
            r#"
            SELECT {TRIP_PROJECTION}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#
        );

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(TripWithOwner::from))
    }

    async fn list(&self) -> Result<Vec<TripWithOwner>, AppError> {
        let sql = format!(
            r#"
            SELECT {TRIP_PROJECTION}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            ORDER BY t.id
            "#
        );

        let rows = sqlx::query_as::<_, TripRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(TripWithOwner::from).collect())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<TripWithOwner>, AppError> {
        let sql = format!(
            r#"
            SELECT {TRIP_PROJECTION}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            WHERE t.user_id = $1
            ORDER BY t.start_date, t.id
            "#
        );

        let rows = sqlx::query_as::<_, TripRow>(&sql)
            .bind(user_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(TripWithOwner::from).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trips WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}
