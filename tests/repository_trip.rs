mod common;

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use trip_planner::domain::entities::NewTrip;
use trip_planner::domain::repositories::TripRepository;
use trip_planner::infrastructure::persistence::PgTripRepository;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[sqlx::test]
async fn test_create_trip_returns_owner(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let repo = PgTripRepository::new(Arc::new(pool));

    let created = repo
        .create(NewTrip {
            user_id,
            destination: "Lisbon".to_string(),
            start_date: date("2025-05-01"),
            end_date: date("2025-04-20"),
            description: Some("Spring".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(created.trip.user_id, user_id);
    assert_eq!(created.trip.destination, "Lisbon");
    assert_eq!(created.trip.end_date, date("2025-04-20"));
    assert_eq!(created.trip.description.as_deref(), Some("Spring"));
    assert_eq!(created.owner.id, user_id);
    assert_eq!(created.owner.name, "Ana");
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let trip_id = common::create_test_trip(&pool, user_id, "Rome", "2025-09-01").await;
    let repo = PgTripRepository::new(Arc::new(pool));

    let found = repo.find_by_id(trip_id).await.unwrap().unwrap();
    assert_eq!(found.trip.destination, "Rome");
    assert_eq!(found.owner.email, "ana@x.com");

    assert!(repo.find_by_id(trip_id + 1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_ordered_by_id(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let first = common::create_test_trip(&pool, user_id, "Rome", "2025-09-01").await;
    let second = common::create_test_trip(&pool, user_id, "Oslo", "2025-01-01").await;
    let repo = PgTripRepository::new(Arc::new(pool));

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.trip.id).collect();

    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test]
async fn test_list_by_user(pool: PgPool) {
    let ana = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let bob = common::create_test_user(&pool, "Bob", "bob@x.com").await;
    common::create_test_trip(&pool, ana, "Rome", "2025-09-01").await;
    common::create_test_trip(&pool, ana, "Oslo", "2025-01-01").await;
    common::create_test_trip(&pool, bob, "Lima", "2025-03-01").await;
    let repo = PgTripRepository::new(Arc::new(pool));

    let trips = repo.list_by_user(ana).await.unwrap();
    let destinations: Vec<_> = trips.iter().map(|t| t.trip.destination.as_str()).collect();

    assert_eq!(destinations, vec!["Oslo", "Rome"]);
    assert!(repo.list_by_user(bob + 10).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let trip_id = common::create_test_trip(&pool, user_id, "Rome", "2025-09-01").await;
    let repo = PgTripRepository::new(Arc::new(pool));

    assert!(repo.exists(trip_id).await.unwrap());
    assert!(!repo.exists(trip_id + 1).await.unwrap());
}
