//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and their responses converted with
//! `into_response`, the same way axum would invoke them.

mod campaign;
mod message;
mod product;
mod settings;
mod wallet;

use influencehub_test_utils::prelude::*;

use crate::util::{app_state, json_body};
