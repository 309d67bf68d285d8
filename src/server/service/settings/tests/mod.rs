mod password;
mod profile;
mod slots;
mod social;
mod subscription;

use entity::prelude::{SocialPlatform, SubscriptionTier};
use influencehub_test_utils::prelude::*;

use super::*;
