//! Service layer for business logic.
//!
//! Each domain service wraps the in-memory repositories with the behaviour of a remote API:
//! simulated latency, pagination, TTL response caches and the marketplace rules that decide
//! whether a write is allowed. Services borrow the
//! [`AppState`](crate::server::model::app::AppState) they operate on and hand out owned copies
//! of every record.

pub mod affiliate;
pub mod analytics;
pub mod cache;
pub mod campaign;
pub mod latency;
pub mod message;
pub mod product;
pub mod settings;
pub mod smart_match;
pub mod wallet;
