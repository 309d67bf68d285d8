mod boost;
mod get_recommendations;

use influencehub_test_utils::prelude::*;

use super::*;
