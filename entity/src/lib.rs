//! Marketplace records shared by the InfluenceHub client and server.
//!
//! Every record serializes with camelCase field names, which is the wire format of the
//! `/api` JSON endpoints and of the seed fixtures embedded in [`fixtures`].

pub mod affiliate;
pub mod analytics;
pub mod campaign;
pub mod common;
pub mod fixtures;
pub mod message;
pub mod product;
pub mod settings;
pub mod wallet;

pub use fixtures::Fixtures;

pub mod prelude {
    pub use crate::{
        affiliate::{
            Affiliate, AffiliateStatus, Commission, CommissionStatus, Payout, PayoutStatus,
            Referral, ReferralStatus,
        },
        analytics::{AnalyticsBase, TopInfluencer, TopProduct},
        campaign::{Campaign, CampaignStatus},
        common::{CommissionType, ContentStyle, EngagementTier, Niche},
        fixtures::Fixtures,
        message::{Conversation, Message},
        product::Product,
        settings::{Settings, SocialAccount, SocialAccounts, SocialPlatform, SubscriptionTier},
        wallet::{TransactionStatus, TransactionType, Wallet, WalletTransaction},
    };
}
