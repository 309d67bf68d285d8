//! Error types for the InfluenceHub server application.
//!
//! Each concern has its own `thiserror` enum (missing records, rule violations,
//! configuration) and all of them fold into [`Error`] through `#[from]` conversions so services
//! can use `?` freely. Every error implements `IntoResponse`, which turns it into a JSON
//! [`ErrorDto`] with a matching status code.

pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError, validation::ValidationError},
};

/// Main error type for the InfluenceHub server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Resource errors (unknown campaign, product, affiliate, referral, commission or conversation)
/// - Validation errors (payout rules, deposits, slot limits, passwords, empty messages)
/// - Seed fixture and scheduler failures
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A record addressed by id does not exist.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// The request breaks a marketplace rule.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug in InfluenceHub's code.
    #[error("Internal error, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Embedded seed data could not be parsed.
    #[error(transparent)]
    FixtureError(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 404 Not Found - For missing records
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
