mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use common::{movie_body, test_server, ADMIN_KEY};
use serde_json::{json, Value};

async fn create_movie(server: &TestServer, title: &str) -> Value {
    let response = server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&movie_body(title))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    body["data"].clone()
}

#[tokio::test]
async fn end_to_end_create_read_update_delete() {
    let server = test_server();

    // Create with the correct secret.
    let created = create_movie(&server, "Test Film").await;
    let id = created["id"].as_str().expect("generated id").to_string();
    assert!(!id.is_empty());

    // Slug is auto-generated: base + base-36 suffix, lowercase alnum/hyphen only.
    let slug = created["slug"].as_str().expect("generated slug");
    assert!(slug.starts_with("test-film-"));
    let suffix = slug.strip_prefix("test-film-").unwrap();
    assert!(!suffix.is_empty());
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));

    // Read back by id.
    let response = server.get(&format!("/content/{id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["title"], "Test Film");

    // Partial update: year changes, title stays.
    let response = server
        .put(&format!("/content/{id}"))
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({ "year": "2024" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["year"], "2024");
    assert_eq!(body["data"]["title"], "Test Film");

    // Delete, then the id resolves to nothing.
    let response = server
        .delete(&format!("/content/{id}"))
        .add_header("x-admin-key", ADMIN_KEY)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Content deleted successfully");

    let response = server.get(&format!("/content/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn slug_and_id_resolve_to_the_same_record() {
    let server = test_server();
    let created = create_movie(&server, "Round Trip").await;
    let id = created["id"].as_str().unwrap();
    let slug = created["slug"].as_str().unwrap();

    let by_id: Value = server.get(&format!("/content/{id}")).await.json();
    let by_slug: Value = server.get(&format!("/content/{slug}")).await.json();
    assert_eq!(by_id["data"]["id"], by_slug["data"]["id"]);
    assert_eq!(by_id["data"]["title"], by_slug["data"]["title"]);
}

#[tokio::test]
async fn list_is_newest_first_and_includes_every_insert() {
    let server = test_server();
    create_movie(&server, "First").await;
    create_movie(&server, "Second").await;
    create_movie(&server, "Third").await;

    let response = server.get("/content").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 3);

    let stamps: Vec<DateTime<Utc>> = records
        .iter()
        .map(|r| {
            r["createdAt"]
                .as_str()
                .unwrap()
                .parse::<DateTime<Utc>>()
                .unwrap()
        })
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn type_filter_and_wildcard() {
    let server = test_server();
    create_movie(&server, "A Movie").await;

    let response = server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({
            "type": "series",
            "title": "A Series",
            "poster": "http://x/s.jpg",
            "seasons": [
                { "seasonNumber": 1, "episodes": [
                    { "episodeNumber": 1, "episodeTitle": "Pilot" }
                ]}
            ]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = server.get("/content?type=movie").await.json();
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "movie");

    let all: Value = server.get("/content?type=all").await.json();
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let unfiltered: Value = server.get("/content").await.json();
    assert_eq!(unfiltered["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_matches_title_description_and_tags() {
    let server = test_server();

    // Matches only through a tag.
    server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({
            "type": "movie",
            "title": "Alpha",
            "poster": "http://x/a.jpg",
            "tags": ["space opera", "cult"],
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // Matches only through the description.
    server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({
            "type": "movie",
            "title": "Beta",
            "poster": "http://x/b.jpg",
            "description": "A journey through SPACE and time",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // Matches nothing.
    server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&movie_body("Gamma"))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/content?search=Space").await.json();
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Alpha"));
    assert!(titles.contains(&"Beta"));
}

#[tokio::test]
async fn partial_update_preserves_fields_and_advances_updated_at() {
    let server = test_server();
    let created = create_movie(&server, "Test Film").await;
    let id = created["id"].as_str().unwrap();
    let created_at: DateTime<Utc> =
        created["updatedAt"].as_str().unwrap().parse().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let body: Value = server
        .put(&format!("/content/{id}"))
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({ "rating": 8.5 }))
        .await
        .json();
    let updated = &body["data"];
    assert_eq!(updated["rating"], 8.5);
    assert_eq!(updated["title"], "Test Film");
    assert_eq!(updated["poster"], "http://x/p.jpg");
    let updated_at: DateTime<Utc> =
        updated["updatedAt"].as_str().unwrap().parse().unwrap();
    assert!(updated_at > created_at);
}

#[tokio::test]
async fn create_without_required_fields_is_a_validation_error() {
    let server = test_server();

    let response = server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({ "type": "movie", "title": "No Poster" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);

    let response = server
        .post("/content")
        .add_header("x-admin-key", ADMIN_KEY)
        .json(&json!({ "type": "documentary", "title": "X", "poster": "http://x/p.jpg" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_without_the_secret_are_rejected_and_change_nothing() {
    let server = test_server();
    let created = create_movie(&server, "Guarded").await;
    let id = created["id"].as_str().unwrap();

    // Create without any key.
    let response = server.post("/content").json(&movie_body("Intruder")).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["success"], false);

    // Update with a wrong key.
    let response = server
        .put(&format!("/content/{id}"))
        .add_header("x-admin-key", "wrong-key")
        .json(&json!({ "title": "Hijacked" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Delete without a key.
    let response = server.delete(&format!("/content/{id}")).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // The store is untouched: still one record, original title.
    let body: Value = server.get("/content").await.json();
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Guarded");
}

#[tokio::test]
async fn missing_records_are_not_found_with_failure_envelope() {
    let server = test_server();

    let response = server
        .get("/content/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get("/content/no-such-slug").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Content not found");
}

#[tokio::test]
async fn options_preflight_answers_no_content() {
    let server = test_server();

    let response = server.method(axum::http::Method::OPTIONS, "/content").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = test_server();
    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
}
