//! Utility functions and helpers for server operations.
//!
//! Small pure helpers shared by services: billing date arithmetic and the affiliate referral
//! code format.

pub mod referral;
pub mod time;
