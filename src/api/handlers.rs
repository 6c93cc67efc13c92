//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics::RequestTimer;
use crate::utils::now_iso8601;

/// Project name reported by `/`.
pub const PROJECT: &str = "DevSecOps Infrastructure Pipeline";
/// Assignment label reported by `/`.
pub const ROOT_ASSIGNMENT: &str = "GET 2026 - DevOps Engineer";
/// Service identifier reported by `/health`.
pub const SERVICE_NAME: &str = "devsecops-pipeline";
/// Environment reported when the configured variable is unset.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Assignment label reported by `/info`.
pub const INFO_ASSIGNMENT: &str = "DevOps Engineer - GET 2026";
/// Repository name reported by `/info`.
pub const REPOSITORY: &str = "Devsecops-Infrastructure-Pipeline";
/// Cloud provider reported by `/info`.
pub const CLOUD_PROVIDER: &str = "AWS";
/// Deployment type reported by `/info`.
pub const DEPLOYMENT_TYPE: &str = "Automated CI/CD with Security Scanning";
/// Technologies reported by `/info`, in presentation order.
pub const TECHNOLOGIES: [&str; 6] = [
    "Python FastAPI",
    "Docker & Docker Compose",
    "Jenkins CI/CD",
    "Trivy Security Scanner",
    "Terraform IaC",
    "AWS EC2 & VPC",
];

static INFO: Lazy<InfoResponse> = Lazy::new(|| InfoResponse {
    assignment: INFO_ASSIGNMENT.to_string(),
    repository: REPOSITORY.to_string(),
    technologies: TECHNOLOGIES.iter().map(|t| t.to_string()).collect(),
    cloud_provider: CLOUD_PROVIDER.to_string(),
    deployment_type: DEPLOYMENT_TYPE.to_string(),
});

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name of the variable echoed as `environment` by `/`.
    pub environment_var: Arc<str>,
}

impl AppState {
    /// Create new app state reading the environment from `environment_var`.
    pub fn new(environment_var: impl Into<Arc<str>>) -> Self {
        Self {
            environment_var: environment_var.into(),
        }
    }

    /// Current value of the configured variable, or the default.
    pub fn environment(&self) -> String {
        std::env::var(&*self.environment_var)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("ENV")
    }
}

/// Root status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Project name.
    pub project: String,
    /// Assignment label.
    pub assignment: String,
    /// Always "running".
    pub status: String,
    /// ISO-8601 time of the request.
    pub timestamp: String,
    /// Deployment environment.
    pub environment: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: String,
    /// Service identifier.
    pub service: String,
    /// ISO-8601 time of the request.
    pub timestamp: String,
}

/// Assignment metadata response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InfoResponse {
    /// Assignment label.
    pub assignment: String,
    /// Repository name.
    pub repository: String,
    /// Technologies used, in presentation order.
    pub technologies: Vec<String>,
    /// Cloud provider.
    pub cloud_provider: String,
    /// Deployment type.
    pub deployment_type: String,
}

/// Root endpoint returning application status.
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Application status", body = RootResponse)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let _timer = RequestTimer::new("root");

    Json(RootResponse {
        project: PROJECT.to_string(),
        assignment: ROOT_ASSIGNMENT.to_string(),
        status: "running".to_string(),
        timestamp: now_iso8601(),
        environment: state.environment(),
    })
}

/// Health check endpoint for monitoring.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    let _timer = RequestTimer::new("health");

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: now_iso8601(),
    })
}

/// Information about the assignment and technologies used.
#[utoipa::path(
    get,
    path = "/info",
    tag = "service",
    responses(
        (status = 200, description = "Assignment metadata", body = InfoResponse)
    )
)]
pub async fn info() -> Json<&'static InfoResponse> {
    let _timer = RequestTimer::new("info");
    Json(&*INFO)
}
