//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and scheduled jobs.

pub mod app;
