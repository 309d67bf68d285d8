//! Data access layer repositories.
//!
//! All marketplace tables live in memory inside a [`MemoryDb`] seeded from the embedded
//! fixtures. Repositories provide the domain-specific access to those tables and always return
//! owned copies of the stored rows.

pub mod affiliate;
pub mod analytics;
pub mod campaign;
pub mod message;
pub mod product;
pub mod settings;
pub mod table;
pub mod wallet;

use std::{ops::Deref, sync::Arc};

use entity::prelude::*;
use tokio::sync::RwLock;

use self::table::Table;

/// Every table of the marketplace.
///
/// Operations spanning several tables lock them in declaration order.
pub struct Tables {
    pub campaigns: Table<Campaign>,
    pub products: Table<Product>,
    pub affiliates: Table<Affiliate>,
    pub referrals: Table<Referral>,
    pub commissions: Table<Commission>,
    pub payouts: Table<Payout>,
    pub conversations: Table<Conversation>,
    pub messages: Table<Message>,
    pub wallet: RwLock<Wallet>,
    pub transactions: Table<WalletTransaction>,
    pub settings: RwLock<Settings>,
    pub password: RwLock<String>,
    pub analytics: AnalyticsBase,
}

/// Shared handle to the in-memory tables.
#[derive(Clone)]
pub struct MemoryDb(Arc<Tables>);

impl Deref for MemoryDb {
    type Target = Tables;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Fixtures> for MemoryDb {
    fn from(fixtures: Fixtures) -> Self {
        Self(Arc::new(Tables {
            campaigns: Table::new(fixtures.campaigns),
            products: Table::new(fixtures.products),
            affiliates: Table::new(fixtures.affiliates),
            referrals: Table::new(fixtures.referrals),
            commissions: Table::new(fixtures.commissions),
            payouts: Table::new(fixtures.payouts),
            conversations: Table::new(fixtures.conversations),
            messages: Table::new(fixtures.messages),
            wallet: RwLock::new(fixtures.wallet),
            transactions: Table::new(fixtures.transactions),
            settings: RwLock::new(fixtures.settings),
            password: RwLock::new(fixtures.password),
            analytics: fixtures.analytics,
        }))
    }
}
