//! DevSecOps Infrastructure Pipeline service.
//!
//! A small HTTP service reporting its own status, health, and the metadata
//! of the deployment pipeline it ships with.
//!
//! # Endpoints
//!
//! ```text
//! GET /              project status, timestamp, environment
//! GET /health        liveness probe
//! GET /info          static assignment metadata
//! GET /openapi.json  OpenAPI document
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, routes, and OpenAPI document
//! - [`server`]: Bind and serve with graceful shutdown
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
