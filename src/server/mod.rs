//! Server application core modules.
//!
//! This module contains the server side of InfluenceHub: the in-memory marketplace tables,
//! the mock data services with their simulated latency and response caches, the SmartMatch
//! recommendation heuristic, scheduled background jobs and the `/api` HTTP surface with its
//! OpenAPI documentation. All state lives in an [`model::app::AppState`] built at startup from
//! the embedded seed fixtures and is lost when the process exits.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
