//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the marketplace tables a test
//! starts with. Records are queued by the `with_*` methods and checked for dangling
//! references during the final `build()` call.

use entity::{fixtures::SEED_PASSWORD, prelude::*};

use crate::{error::TestError, factory, setup::TestSetup};

/// Builder for declarative test initialization.
///
/// Starts from empty tables, a free tier account with an empty wallet and the seeded password.
/// Use `with_seed_fixtures()` to start from the bundled seed data instead.
pub struct TestBuilder {
    seed_fixtures: bool,
    fixtures: Fixtures,
    wallet: Option<Wallet>,
    settings: Option<Settings>,
    password: Option<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            seed_fixtures: false,
            fixtures: Fixtures::default(),
            wallet: None,
            settings: None,
            password: None,
        }
    }

    /// Start from the bundled seed data, records added with `with_*` are appended to it.
    pub fn with_seed_fixtures(mut self) -> Self {
        self.seed_fixtures = true;
        self
    }

    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.fixtures.campaigns.push(campaign);
        self
    }

    /// Insert `count` factory campaigns with ids `1..=count`.
    pub fn with_campaigns(mut self, count: i32) -> Self {
        self.fixtures
            .campaigns
            .extend((1..=count).map(factory::campaign));
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.fixtures.products.push(product);
        self
    }

    pub fn with_affiliate(mut self, affiliate: Affiliate) -> Self {
        self.fixtures.affiliates.push(affiliate);
        self
    }

    /// Insert a referral, its affiliate must also be added.
    pub fn with_referral(mut self, referral: Referral) -> Self {
        self.fixtures.referrals.push(referral);
        self
    }

    pub fn with_commission(mut self, commission: Commission) -> Self {
        self.fixtures.commissions.push(commission);
        self
    }

    pub fn with_payout(mut self, payout: Payout) -> Self {
        self.fixtures.payouts.push(payout);
        self
    }

    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.fixtures.conversations.push(conversation);
        self
    }

    /// Insert a message, its conversation must also be added.
    pub fn with_message(mut self, message: Message) -> Self {
        self.fixtures.messages.push(message);
        self
    }

    pub fn with_wallet(mut self, wallet: Wallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn with_transaction(mut self, transaction: WalletTransaction) -> Self {
        self.fixtures.transactions.push(transaction);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Build the test setup.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Tables ready to be converted into application state
    /// - `Err(TestError::FixtureError)` - The bundled seed data failed to parse
    /// - `Err(TestError::InvalidFixture)` - A referral, commission or message points at a
    ///   record that was never added
    pub fn build(self) -> Result<TestSetup, TestError> {
        let mut fixtures = if self.seed_fixtures {
            Fixtures::seed()?
        } else {
            Fixtures {
                settings: factory::settings(SubscriptionTier::Free, 0),
                password: SEED_PASSWORD.to_string(),
                analytics: factory::analytics(),
                ..Fixtures::default()
            }
        };

        fixtures.campaigns.extend(self.fixtures.campaigns);
        fixtures.products.extend(self.fixtures.products);
        fixtures.affiliates.extend(self.fixtures.affiliates);
        fixtures.referrals.extend(self.fixtures.referrals);
        fixtures.commissions.extend(self.fixtures.commissions);
        fixtures.payouts.extend(self.fixtures.payouts);
        fixtures.conversations.extend(self.fixtures.conversations);
        fixtures.messages.extend(self.fixtures.messages);
        fixtures.transactions.extend(self.fixtures.transactions);

        if let Some(wallet) = self.wallet {
            fixtures.wallet = wallet;
        }
        if let Some(settings) = self.settings {
            fixtures.settings = settings;
        }
        if let Some(password) = self.password {
            fixtures.password = password;
        }

        check_references(&fixtures)?;

        Ok(TestSetup { fixtures })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_references(fixtures: &Fixtures) -> Result<(), TestError> {
    let has_affiliate = |id: i32| fixtures.affiliates.iter().any(|a| a.id == id);

    if let Some(referral) = fixtures.referrals.iter().find(|r| !has_affiliate(r.affiliate_id)) {
        return Err(TestError::InvalidFixture(format!(
            "referral {} references missing affiliate {}",
            referral.id, referral.affiliate_id
        )));
    }

    if let Some(commission) = fixtures
        .commissions
        .iter()
        .find(|c| !has_affiliate(c.affiliate_id))
    {
        return Err(TestError::InvalidFixture(format!(
            "commission {} references missing affiliate {}",
            commission.id, commission.affiliate_id
        )));
    }

    if let Some(message) = fixtures.messages.iter().find(|m| {
        !fixtures
            .conversations
            .iter()
            .any(|c| c.id == m.conversation_id)
    }) {
        return Err(TestError::InvalidFixture(format!(
            "message {} references missing conversation {}",
            message.id, message.conversation_id
        )));
    }

    Ok(())
}
