//! HTTP-level integration tests for the note endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_and_note_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", json!({"name": "Work"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1, "name": "Work"}));

    let expected = json!({
        "id": 1,
        "title": "T",
        "content": "C",
        "category": {"id": 1, "name": "Work"}
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        json!({"title": "T", "content": "C", "category_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/notes/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_with_missing_category_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        json!({"title": "Orphan", "content": "nowhere", "category_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_CATEGORY");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/notes").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_with_empty_title_returns_400(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/notes",
        json!({"title": "", "content": "body", "category_id": category_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_with_content_over_two_mebibytes(pool: PgPool) {
    let category_id = common::create_category(&pool, "Archive").await;
    let content = "x".repeat(3 * 1024 * 1024);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        json!({"title": "Big", "content": &content, "category_id": category_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/notes/{id}")).await).await;
    assert_eq!(fetched["content"].as_str().unwrap().len(), content.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_with_nul_in_content_returns_400(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        json!({"title": "Binary", "content": "a\u{0}b", "category_id": category_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/notes").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_with_missing_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/notes", json!({"title": "No body"})).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_notes_embeds_categories(pool: PgPool) {
    let work = common::create_category(&pool, "Work").await;
    let home = common::create_category(&pool, "Home").await;
    common::create_note(&pool, work, "Report").await;
    common::create_note(&pool, home, "Groceries").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/notes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notes = json.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["title"], "Report");
    assert_eq!(notes[0]["category"], json!({"id": work, "name": "Work"}));
    assert_eq!(notes[1]["title"], "Groceries");
    assert_eq!(notes[1]["category"], json!({"id": home, "name": "Home"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_note_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/notes/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_note_reflects_category_rename(pool: PgPool) {
    let category_id = common::create_category(&pool, "Draft").await;
    let note_id = common::create_note(&pool, category_id, "Plan").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/categories/{category_id}"),
        json!({"name": "Final"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let note = body_json(get(app, &format!("/api/notes/{note_id}")).await).await;
    assert_eq!(note["category"]["name"], "Final");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_note_replaces_all_fields(pool: PgPool) {
    let work = common::create_category(&pool, "Work").await;
    let home = common::create_category(&pool, "Home").await;
    let note_id = common::create_note(&pool, work, "Before").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/notes/{note_id}"),
        json!({"title": "After", "content": "New body", "category_id": home}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": note_id,
            "title": "After",
            "content": "New body",
            "category": {"id": home, "name": "Home"}
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_note_with_missing_category_leaves_note_unchanged(pool: PgPool) {
    let work = common::create_category(&pool, "Work").await;
    let note_id = common::create_note(&pool, work, "Stable").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/notes/{note_id}"),
        json!({"title": "Changed", "content": "Changed", "category_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_CATEGORY");

    let app = common::build_test_app(pool);
    let note = body_json(get(app, &format!("/api/notes/{note_id}")).await).await;
    assert_eq!(note["title"], "Stable");
    assert_eq!(note["content"], "Stable content");
    assert_eq!(note["category"]["id"], work);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_note_returns_404_before_category_check(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/notes/999999",
        json!({"title": "Ghost", "content": "Ghost", "category_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_note_returns_message(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;
    let note_id = common::create_note(&pool, category_id, "Done").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/notes/{note_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Note deleted"}));

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/notes/{note_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_note_is_404_every_time(pool: PgPool) {
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = delete(app, "/api/notes/31337").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
