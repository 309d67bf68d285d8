mod schedule;

use influencehub_test_utils::prelude::*;

use super::*;
