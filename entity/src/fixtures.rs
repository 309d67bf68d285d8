//! Seed data for the in-memory marketplace.
//!
//! The JSON files under `entity/fixtures/` are embedded at compile time and parsed into a
//! [`Fixtures`] bundle when the application state is constructed.

use serde::Deserialize;

use crate::{
    affiliate::{Affiliate, Commission, Payout, Referral},
    analytics::AnalyticsBase,
    campaign::Campaign,
    message::{Conversation, Message},
    product::Product,
    settings::Settings,
    wallet::{Wallet, WalletTransaction},
};

const CAMPAIGNS_JSON: &str = include_str!("../fixtures/campaigns.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
const AFFILIATES_JSON: &str = include_str!("../fixtures/affiliates.json");
const MESSAGES_JSON: &str = include_str!("../fixtures/messages.json");
const WALLET_JSON: &str = include_str!("../fixtures/wallet.json");
const SETTINGS_JSON: &str = include_str!("../fixtures/settings.json");
const ANALYTICS_JSON: &str = include_str!("../fixtures/analytics.json");

/// Password the account settings are seeded with.
pub const SEED_PASSWORD: &str = "currentpass123";

#[derive(Deserialize)]
struct AffiliateFixture {
    affiliates: Vec<Affiliate>,
    referrals: Vec<Referral>,
    commissions: Vec<Commission>,
    payouts: Vec<Payout>,
}

#[derive(Deserialize)]
struct MessageFixture {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct WalletFixture {
    wallet: Wallet,
    transactions: Vec<WalletTransaction>,
}

/// Every table of the marketplace in its initial state.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub campaigns: Vec<Campaign>,
    pub products: Vec<Product>,
    pub affiliates: Vec<Affiliate>,
    pub referrals: Vec<Referral>,
    pub commissions: Vec<Commission>,
    pub payouts: Vec<Payout>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    pub wallet: Wallet,
    pub transactions: Vec<WalletTransaction>,
    pub settings: Settings,
    pub password: String,
    pub analytics: AnalyticsBase,
}

impl Fixtures {
    /// Parse the embedded seed data.
    ///
    /// # Returns
    /// - `Ok(Fixtures)` - All tables populated from the bundled JSON
    /// - `Err(serde_json::Error)` - A fixture file does not match its record type
    pub fn seed() -> Result<Self, serde_json::Error> {
        let affiliates: AffiliateFixture = serde_json::from_str(AFFILIATES_JSON)?;
        let messages: MessageFixture = serde_json::from_str(MESSAGES_JSON)?;
        let wallet: WalletFixture = serde_json::from_str(WALLET_JSON)?;

        Ok(Self {
            campaigns: serde_json::from_str(CAMPAIGNS_JSON)?,
            products: serde_json::from_str(PRODUCTS_JSON)?,
            affiliates: affiliates.affiliates,
            referrals: affiliates.referrals,
            commissions: affiliates.commissions,
            payouts: affiliates.payouts,
            conversations: messages.conversations,
            messages: messages.messages,
            wallet: wallet.wallet,
            transactions: wallet.transactions,
            settings: serde_json::from_str(SETTINGS_JSON)?,
            password: SEED_PASSWORD.to_string(),
            analytics: serde_json::from_str(ANALYTICS_JSON)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_parse() {
        let fixtures = Fixtures::seed().expect("fixtures should parse");

        assert!(!fixtures.campaigns.is_empty());
        assert!(!fixtures.products.is_empty());
        assert!(!fixtures.affiliates.is_empty());
        assert!(!fixtures.conversations.is_empty());
        assert!(!fixtures.transactions.is_empty());
        assert_eq!(fixtures.password, SEED_PASSWORD);
    }

    #[test]
    fn referrals_point_at_seeded_affiliates() {
        let fixtures = Fixtures::seed().unwrap();

        for referral in &fixtures.referrals {
            assert!(fixtures
                .affiliates
                .iter()
                .any(|affiliate| affiliate.id == referral.affiliate_id));
        }
    }

    #[test]
    fn messages_point_at_seeded_conversations() {
        let fixtures = Fixtures::seed().unwrap();

        for message in &fixtures.messages {
            assert!(fixtures
                .conversations
                .iter()
                .any(|conversation| conversation.id == message.conversation_id));
        }
    }
}
