//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::docs;
use super::handlers::{health, info, root, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service endpoints
        .route("/", get(root))
        .route("/health", get(health))
        .route("/info", get(info))
        .with_state(state)
        .merge(docs_router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_router() -> Router {
    Router::new().route(docs::OPENAPI_PATH, get(docs::openapi))
}

// The UI also serves the document at OPENAPI_PATH.
#[cfg(feature = "swagger-ui")]
fn docs_router() -> Router {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    SwaggerUi::new("/docs")
        .url(docs::OPENAPI_PATH, docs::ApiDoc::openapi())
        .into()
}
