//! Request and response types shared by the web client and the `/api` server, along with the
//! small pieces of marketplace logic both sides need (campaign filtering, payout checks,
//! number formatting).

pub mod affiliate;
pub mod analytics;
pub mod api;
pub mod campaign;
pub mod format;
pub mod message;
pub mod page;
pub mod product;
pub mod settings;
pub mod wallet;
