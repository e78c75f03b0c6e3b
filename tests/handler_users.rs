mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_users_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_list_users_ordered_by_id(pool: PgPool) {
    common::create_test_user(&pool, "Zed", "zed@x.com").await;
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Zed");
    assert_eq!(items[1]["name"], "Ana");
    assert!(items[0]["id"].as_i64().unwrap() < items[1]["id"].as_i64().unwrap());
    assert!(items[0].get("created_at").is_some());
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ana", "email": "ana@x.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert!(json.get("created_at").is_some());
}

#[sqlx::test]
async fn test_create_user_missing_email(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ana" }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["fields"], json!(["email"]));
}

#[sqlx::test]
async fn test_create_user_empty_name(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "", "email": "ana@x.com" }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_user_malformed_body(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/users")
        .content_type("application/json")
        .text("{not json")
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_user_duplicate_email(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/users")
        .json(&json!({ "name": "Other", "email": "ana@x.com" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Email already exists");
    assert_eq!(json["error"]["details"]["field"], "email");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("ana@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_create_user_rejects_nul_byte(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/users")
        .json(&json!({ "name": "A\u{0}na", "email": "ana@x.com" }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_create_then_get_returns_same_user(pool: PgPool) {
    let server = common::make_server(pool);

    let created = server
        .post("/users")
        .json(&json!({ "name": "Ana", "email": "ana@x.com" }))
        .await
        .json::<serde_json::Value>();

    let fetched = server
        .get(&format!("/users/{}", created["id"]))
        .await
        .json::<serde_json::Value>();

    assert_eq!(created, fetched);
}

// ─── GET BY ID ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_user_success(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/users/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["email"], "ana@x.com");
}

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/users/999").expect_failure().await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "User not found");
}

#[sqlx::test]
async fn test_get_user_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    for raw in ["abc", "-1", "1.5"] {
        let response = server.get(&format!("/users/{raw}")).expect_failure().await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Invalid user ID");
    }
}

// ─── LOOKUPS ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_user_by_email(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get("/users/email/ana@x.com").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["id"], id);
}

#[sqlx::test]
async fn test_get_user_by_email_not_found(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server
        .get("/users/email/nobody@x.com")
        .expect_failure()
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_search_users_by_name_case_insensitive(pool: PgPool) {
    common::create_test_user(&pool, "Anabel", "anabel@x.com").await;
    common::create_test_user(&pool, "Bob", "bob@x.com").await;
    common::create_test_user(&pool, "Diana", "diana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get("/users/name/ANA").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Anabel", "Diana"]);
}

#[sqlx::test]
async fn test_get_user_non_utf8_path(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/users/%FF").expect_failure().await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_lookups_reject_nul_byte_in_path(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    for path in ["/users/name/a%00b", "/users/email/a%00b@x.com"] {
        let response = server.get(path).expect_failure().await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[sqlx::test]
async fn test_search_users_by_name_no_match(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get("/users/name/zzz").expect_failure().await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "No users found with this name");
}

#[sqlx::test]
async fn test_search_users_by_name_treats_wildcards_literally(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@x.com").await;
    let server = common::make_server(pool);

    let response = server.get("/users/name/%25").expect_failure().await;

    response.assert_status_not_found();
}
