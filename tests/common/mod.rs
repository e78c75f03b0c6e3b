#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use trip_planner::routes::router;
use trip_planner::state::AppState;

pub async fn create_test_user(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_trip(pool: &PgPool, user_id: i64, destination: &str, start: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO trips (user_id, destination, start_date, end_date)
         VALUES ($1, $2, $3::date, $3::date + 5) RETURNING id",
    )
    .bind(user_id)
    .bind(destination)
    .bind(start)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_itinerary(
    pool: &PgPool,
    trip_id: i64,
    day_number: i32,
    activity: &str,
    start_time: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO itineraries (trip_id, day_number, activity, location, start_time)
         VALUES ($1, $2, $3, 'Somewhere', $4::time) RETURNING id",
    )
    .bind(trip_id)
    .bind(day_number)
    .bind(activity)
    .bind(start_time)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Test server over the full router (no path normalization).
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
