//! Tests for the HTTP API.

use super::{AppState, router};
use crate::conf::ConfigEntry;
use crate::context::ConsoleContext;
use crate::events::{EventAction, read_events};
use crate::settings::Settings;
use crate::test_support::{OVERRIDES_SAMPLE, create_recipe_dir};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn state(ctx: &ConsoleContext) -> AppState {
    AppState::new(ctx.clone(), Settings::default())
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (status, body) = send(state(&ctx), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "message": "hummingbird backend is running"})
    );
}

#[tokio::test]
async fn test_list_configs() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (status, body) = send(state(&ctx), get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["directory"], ctx.recipe_dir.display().to_string());

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["fileName"], "deployment.conf");
    assert_eq!(data[1]["fileName"], "overrides.conf");
    assert_eq!(
        data[1]["items"][2],
        json!({
            "key": "payments",
            "value": "payments {\n    provider = stripe\n}",
            "commented": false,
            "isObject": true,
        })
    );
    assert_eq!(
        data[0]["items"][3]["value"],
        json!(["auth-service", "#billing-service"])
    );
}

#[tokio::test]
async fn test_list_configs_reports_missing_file_inline() {
    let (_temp_dir, ctx) = create_recipe_dir();
    std::fs::remove_file(ctx.recipe_dir.join("overrides.conf")).unwrap();

    let (status, body) = send(state(&ctx), get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][1]["items"], json!([]));
    assert_eq!(body["data"][1]["error"], "File not found or could not be read");
    assert!(body["data"][0].get("error").is_none());
}

#[tokio::test]
async fn test_list_configs_without_directory() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ConsoleContext::from_recipe_dir(temp_dir.path().join("missing"));

    let (status, body) = send(state(&ctx), get("/api/config")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe directory not found");
    assert_eq!(body["path"], ctx.recipe_dir.display().to_string());
}

#[tokio::test]
async fn test_get_single_config() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (status, body) = send(state(&ctx), get("/api/config/overrides.conf")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fileName"], "overrides.conf");
    assert_eq!(body["items"][0]["key"], "feature.flag");
}

#[tokio::test]
async fn test_get_missing_config_is_not_found() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (status, body) = send(state(&ctx), get("/api/config/absent.conf")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "File not found or could not be read");
}

#[tokio::test]
async fn test_get_rejects_traversal() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (status, _body) = send(state(&ctx), get("/api/config/..%2Fsecret")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_round_trips_unchanged_overrides() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let (_, listing) = send(state(&ctx), get("/api/config/overrides.conf")).await;

    let request = json!({"fileName": "overrides.conf", "items": listing["items"]});
    let (status, body) = send(state(&ctx), post_json("/api/config/save", &request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Configuration saved to overrides.conf"})
    );
    let text = std::fs::read_to_string(ctx.recipe_dir.join("overrides.conf")).unwrap();
    assert_eq!(text, OVERRIDES_SAMPLE);

    let events = read_events(&ctx).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, EventAction::Save);
}

#[tokio::test]
async fn test_save_creates_new_file() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let items = vec![
        ConfigEntry::scalar("region", "us-east-1", false),
        ConfigEntry::list("zones", vec!["a".to_string(), "#b".to_string()]),
    ];
    let request = json!({"fileName": "extra.conf", "items": items});

    let (status, _) = send(state(&ctx), post_json("/api/config/save", &request)).await;

    assert_eq!(status, StatusCode::OK);
    let text = std::fs::read_to_string(ctx.recipe_dir.join("extra.conf")).unwrap();
    assert_eq!(text, "region = us-east-1\nzones = [\n\n    a,\n    #b,\n\n]\n\n");
}

#[tokio::test]
async fn test_save_missing_fields() {
    let (_temp_dir, ctx) = create_recipe_dir();

    for request in [
        json!({"items": []}),
        json!({"fileName": "deployment.conf"}),
        json!({"fileName": "", "items": []}),
    ] {
        let (status, body) = send(state(&ctx), post_json("/api/config/save", &request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: fileName and items");
    }
}

#[tokio::test]
async fn test_save_rejects_entry_with_empty_key() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let request = json!({
        "fileName": "overrides.conf",
        "items": [{"key": "a", "value": "1"}, {"key": "", "value": "v"}],
    });

    let (status, body) = send(state(&ctx), post_json("/api/config/save", &request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "entry 1: key must not be empty");
    let text = std::fs::read_to_string(ctx.recipe_dir.join("overrides.conf")).unwrap();
    assert_eq!(text, OVERRIDES_SAMPLE);
}

#[tokio::test]
async fn test_save_malformed_body() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let request = Request::builder()
        .method("POST")
        .uri("/api/config/save")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(state(&ctx), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_save_write_failure_is_server_error() {
    let (_temp_dir, ctx) = create_recipe_dir();
    std::fs::create_dir(ctx.recipe_dir.join("blocked.conf")).unwrap();
    let request = json!({"fileName": "blocked.conf", "items": []});

    let (status, body) = send(state(&ctx), post_json("/api/config/save", &request)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save configuration file");
    assert!(body["details"].as_str().unwrap().contains("blocked.conf"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_temp_dir, ctx) = create_recipe_dir();
    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = router(state(&ctx)).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
