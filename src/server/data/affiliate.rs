use chrono::{DateTime, Utc};
use entity::prelude::{
    Affiliate, AffiliateStatus, Commission, Payout, Referral, ReferralStatus,
};
use tokio::sync::RwLockWriteGuard;

use crate::{
    model::affiliate::{AffiliatePatchDto, NewAffiliateDto, NewReferralDto},
    server::data::MemoryDb,
};

/// Share of a referred subscription paid to new affiliates.
pub const DEFAULT_COMMISSION_RATE: f64 = 0.5;

/// Write access to every affiliate program table at once.
///
/// Guards are taken in the order affiliates, referrals, commissions, payouts.
pub struct AffiliateLedger<'a> {
    pub affiliates: RwLockWriteGuard<'a, Vec<Affiliate>>,
    pub referrals: RwLockWriteGuard<'a, Vec<Referral>>,
    pub commissions: RwLockWriteGuard<'a, Vec<Commission>>,
    pub payouts: RwLockWriteGuard<'a, Vec<Payout>>,
}

pub struct AffiliateRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> AffiliateRepository<'a> {
    /// Creates a new instance of [`AffiliateRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Affiliate> {
        self.db.affiliates.all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Affiliate> {
        self.db.affiliates.find(id).await
    }

    pub async fn find_active_by_referral_code(&self, code: &str) -> Option<Affiliate> {
        self.db
            .affiliates
            .find_by(|affiliate| {
                affiliate.referral_code == code && affiliate.status == AffiliateStatus::Active
            })
            .await
    }

    /// Creates an active affiliate with zeroed counters and the default commission rate
    pub async fn create(
        &self,
        affiliate: NewAffiliateDto,
        referral_code: String,
        now: DateTime<Utc>,
    ) -> Affiliate {
        self.db
            .affiliates
            .insert_with(|id| Affiliate {
                id,
                name: affiliate.name,
                email: affiliate.email,
                referral_code,
                status: AffiliateStatus::Active,
                join_date: now,
                total_earnings: 0.0,
                pending_commissions: 0.0,
                total_referrals: 0,
                successful_referrals: 0,
                commission_rate: DEFAULT_COMMISSION_RATE,
                last_payout_date: None,
            })
            .await
    }

    pub async fn update(&self, id: i32, patch: AffiliatePatchDto) -> Option<Affiliate> {
        self.db
            .affiliates
            .update(id, |affiliate| patch.apply(affiliate))
            .await
    }

    /// Deletes an affiliate, returning whether it existed
    pub async fn delete(&self, id: i32) -> bool {
        self.db.affiliates.remove(id).await
    }

    /// Lock all affiliate program tables for a multi-table change
    pub async fn ledger(&self) -> AffiliateLedger<'a> {
        let db: &'a MemoryDb = self.db;

        let affiliates = db.affiliates.write().await;
        let referrals = db.referrals.write().await;
        let commissions = db.commissions.write().await;
        let payouts = db.payouts.write().await;

        AffiliateLedger {
            affiliates,
            referrals,
            commissions,
            payouts,
        }
    }
}

pub struct ReferralRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> ReferralRepository<'a> {
    /// Creates a new instance of [`ReferralRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Referral> {
        self.db.referrals.all().await
    }

    pub async fn get_by_affiliate(&self, affiliate_id: i32) -> Vec<Referral> {
        self.db
            .referrals
            .filter(|referral| referral.affiliate_id == affiliate_id)
            .await
    }

    /// Build a fresh pending referral row
    pub fn pending(id: i32, referral: NewReferralDto, now: DateTime<Utc>) -> Referral {
        Referral {
            id,
            affiliate_id: referral.affiliate_id,
            name: referral.name,
            email: referral.email,
            signup_date: now,
            status: ReferralStatus::Pending,
            subscription_plan: None,
            subscription_value: 0.0,
            commission_earned: 0.0,
            conversion_date: None,
        }
    }
}

pub struct CommissionRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> CommissionRepository<'a> {
    /// Creates a new instance of [`CommissionRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Commission> {
        self.db.commissions.all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Commission> {
        self.db.commissions.find(id).await
    }

    pub async fn get_by_affiliate(&self, affiliate_id: i32) -> Vec<Commission> {
        self.db
            .commissions
            .filter(|commission| commission.affiliate_id == affiliate_id)
            .await
    }
}

pub struct PayoutRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> PayoutRepository<'a> {
    /// Creates a new instance of [`PayoutRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Payout> {
        self.db.payouts.all().await
    }

    pub async fn get_by_affiliate(&self, affiliate_id: i32) -> Vec<Payout> {
        self.db
            .payouts
            .filter(|payout| payout.affiliate_id == affiliate_id)
            .await
    }
}
