//! HTTP controller endpoints for the InfluenceHub web API.
//!
//! Axum handlers for every marketplace domain. Controllers extract path, query and body
//! parameters, call the matching service and turn its result into a JSON response. Every handler
//! is annotated for utoipa so the router can collect the OpenAPI document.

pub mod affiliate;
pub mod analytics;
pub mod campaign;
pub mod config;
pub mod message;
pub mod product;
pub mod settings;
pub mod wallet;
