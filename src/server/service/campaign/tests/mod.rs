mod create;
mod delete;
mod get_all;
mod get_by_id;
mod status;

use influencehub_test_utils::prelude::*;

use super::*;
