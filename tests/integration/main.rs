//! Black-box tests driving the full router through its public API.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use devsecops_pipeline::api::{create_router, AppState};
use devsecops_pipeline::Config;

fn app(environment_var: &str) -> Router {
    create_router(AppState::new(environment_var))
}

async fn fetch(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, to_bytes(response.into_body(), usize::MAX).await.unwrap())
}

async fn fetch_json(app: Router, uri: &str) -> Value {
    let (status, body) = fetch(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn root_is_stable_apart_from_timestamp() {
    let router = app("DEVSECOPS_IT_ROOT_UNSET");

    let first = fetch_json(router.clone(), "/").await;
    let second = fetch_json(router, "/").await;

    for key in ["project", "assignment", "status", "environment"] {
        assert_eq!(first[key], second[key], "field {key} changed");
    }
    assert_eq!(first["status"], "running");
    assert_eq!(first["environment"], "production");

    let t1 = DateTime::parse_from_rfc3339(first["timestamp"].as_str().unwrap()).unwrap();
    let t2 = DateTime::parse_from_rfc3339(second["timestamp"].as_str().unwrap()).unwrap();
    assert!(t1 <= t2);
}

#[tokio::test]
async fn root_has_exactly_the_documented_fields() {
    let body = fetch_json(app("DEVSECOPS_IT_FIELDS"), "/").await;
    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    assert_eq!(
        keys,
        vec!["assignment", "environment", "project", "status", "timestamp"]
    );
}

#[tokio::test]
async fn environment_tracks_variable_per_request() {
    let var = "DEVSECOPS_IT_ENV_TOGGLE";
    let router = app(var);

    std::env::set_var(var, "staging");
    let body = fetch_json(router.clone(), "/").await;
    assert_eq!(body["environment"], "staging");

    std::env::remove_var(var);
    let body = fetch_json(router, "/").await;
    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn health_service_is_constant() {
    let router = app("DEVSECOPS_IT_HEALTH");

    let first = fetch_json(router.clone(), "/health").await;
    let second = fetch_json(router, "/health").await;

    assert_eq!(first["status"], "healthy");
    assert_eq!(first["service"], second["service"]);
    assert!(DateTime::parse_from_rfc3339(first["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn info_is_byte_identical_across_calls() {
    let router = app("DEVSECOPS_IT_INFO");

    let (_, first) = fetch(router.clone(), "/info").await;
    let (_, second) = fetch(router, "/info").await;
    assert_eq!(first, second);

    let body: Value = serde_json::from_slice(&first).unwrap();
    let technologies: Vec<&str> = body["technologies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(
        technologies,
        vec![
            "Python FastAPI",
            "Docker & Docker Compose",
            "Jenkins CI/CD",
            "Trivy Security Scanner",
            "Terraform IaC",
            "AWS EC2 & VPC",
        ]
    );
    assert_eq!(body["assignment"], "DevOps Engineer - GET 2026");
    assert_eq!(body["deployment_type"], "Automated CI/CD with Security Scanning");
}

#[tokio::test]
async fn query_strings_are_ignored() {
    let body = fetch_json(app("DEVSECOPS_IT_QUERY"), "/health?verbose=1").await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unmatched_routes_use_router_defaults() {
    let (status, _) = fetch(app("DEVSECOPS_IT_404"), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = app("DEVSECOPS_IT_405")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn router_built_from_config_uses_its_variable() {
    let config = Config {
        environment_var: "DEVSECOPS_IT_FROM_CONFIG".to_string(),
        ..Config::default()
    };
    std::env::set_var(&config.environment_var, "qa");

    let body = fetch_json(app(&config.environment_var), "/").await;
    assert_eq!(body["environment"], "qa");
}
