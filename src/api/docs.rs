//! OpenAPI document for the service endpoints.

use axum::Json;
use utoipa::OpenApi;

use super::handlers::{self, HealthResponse, InfoResponse, RootResponse};

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevSecOps Infrastructure Pipeline",
        description = "Automated security scanning and deployment pipeline - GET 2026",
        version = "1.0.0"
    ),
    paths(handlers::root, handlers::health, handlers::info),
    components(schemas(RootResponse, HealthResponse, InfoResponse)),
    tags((name = "service", description = "Status and metadata endpoints"))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
