//! Affiliate program service.
//!
//! Affiliates refer customers with their referral code. A referral converts when the customer
//! subscribes, which creates a pending commission worth the subscription value times the
//! affiliate's commission rate. Payouts settle every pending commission of an affiliate at once.
//!
//! Conversions and payouts change several tables, so they run against an
//! [`AffiliateLedger`](crate::server::data::affiliate::AffiliateLedger) holding all of them.

#[cfg(test)]
mod tests;

use chrono::{Datelike, Utc};
use entity::prelude::{
    Affiliate, Commission, CommissionStatus, Payout, PayoutStatus, Referral, ReferralStatus,
};

use crate::{
    model::{
        affiliate::{
            referral_link, AffiliatePatchDto, AffiliatePayoutRequestDto, AffiliateStatsDto,
            ConvertReferralDto, NewAffiliateDto, NewReferralDto, ReferralConversionDto,
            ReferralLinkDto, AFFILIATE_PAGE_LIMIT, DEFAULT_PAYOUT_METHOD,
        },
        page::{Page, PageQuery},
        wallet::MINIMUM_PAYOUT,
    },
    server::{
        data::{
            affiliate::{
                AffiliateRepository, CommissionRepository, PayoutRepository, ReferralRepository,
            },
            table::next_id,
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::app::AppState,
        service::{cache::cache_key, latency::Latency},
        util::referral::referral_code,
    },
};

/// Service for the affiliate referral program.
pub struct AffiliateService<'a> {
    state: &'a AppState,
}

impl<'a> AffiliateService<'a> {
    /// Creates a new instance of [`AffiliateService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Retrieves one page of affiliates, 50 per page unless a limit is given.
    pub async fn get_all(&self, query: PageQuery) -> Result<Page<Affiliate>, Error> {
        Latency::List.simulate(&self.state.config).await;

        let page = query.page();
        let limit = query.limit_or(AFFILIATE_PAGE_LIMIT);
        let key = cache_key("getAll", &[&page, &limit]);

        let generation = {
            let affiliates = self.state.cache.affiliates.lock().await;
            if query.use_cache() {
                if let Some(cached) = affiliates.get(&key, Utc::now()) {
                    return Ok(cached);
                }
            }
            affiliates.generation()
        };

        let affiliates = AffiliateRepository::new(&self.state.db).get_all().await;
        let result = Page::slice(&affiliates, page, limit);

        self.state
            .cache
            .affiliates
            .lock()
            .await
            .insert_if_current(key, result.clone(), Utc::now(), generation);

        Ok(result)
    }

    /// Retrieves an affiliate by id, `None` if there is no such affiliate.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Affiliate>, Error> {
        let key = cache_key("getById", &[&id]);
        let generation = {
            let affiliate = self.state.cache.affiliate.lock().await;
            if let Some(cached) = affiliate.get(&key, Utc::now()) {
                return Ok(cached);
            }
            affiliate.generation()
        };

        Latency::Instant.simulate(&self.state.config).await;

        let affiliate = AffiliateRepository::new(&self.state.db).get_by_id(id).await;
        self.state
            .cache
            .affiliate
            .lock()
            .await
            .insert_if_current(key, affiliate.clone(), Utc::now(), generation);

        Ok(affiliate)
    }

    /// Enrolls a new, active affiliate with a fresh referral code.
    pub async fn create(&self, affiliate: NewAffiliateDto) -> Result<Affiliate, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        let now = Utc::now();
        let code = referral_code(&affiliate.name, now.year(), &mut rand::rng());
        let affiliate = AffiliateRepository::new(&self.state.db)
            .create(affiliate, code, now)
            .await;
        self.invalidate().await;

        Ok(affiliate)
    }

    pub async fn update(&self, id: i32, patch: AffiliatePatchDto) -> Result<Affiliate, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        let affiliate = AffiliateRepository::new(&self.state.db)
            .update(id, patch)
            .await
            .ok_or(ResourceError::AffiliateNotFound(id))?;
        self.invalidate().await;

        Ok(affiliate)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        Latency::Query.simulate(&self.state.config).await;

        if !AffiliateRepository::new(&self.state.db).delete(id).await {
            return Err(ResourceError::AffiliateNotFound(id).into());
        }
        self.invalidate().await;

        Ok(())
    }

    pub async fn get_all_referrals(&self) -> Result<Vec<Referral>, Error> {
        Latency::Query.simulate(&self.state.config).await;

        Ok(ReferralRepository::new(&self.state.db).get_all().await)
    }

    pub async fn get_referrals_by_affiliate(
        &self,
        affiliate_id: i32,
    ) -> Result<Vec<Referral>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(ReferralRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await)
    }

    /// Records a pending referral and counts it towards the affiliate's referrals.
    ///
    /// # Returns
    /// - `Ok(Referral)` - The stored pending referral
    /// - `Err(Error::ResourceError)` - The referring affiliate does not exist
    pub async fn create_referral(&self, referral: NewReferralDto) -> Result<Referral, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        let mut ledger = AffiliateRepository::new(&self.state.db).ledger().await;

        let affiliate_id = referral.affiliate_id;
        let affiliate = ledger
            .affiliates
            .iter_mut()
            .find(|affiliate| affiliate.id == affiliate_id)
            .ok_or(ResourceError::AffiliateNotFound(affiliate_id))?;
        affiliate.total_referrals += 1;

        let referral =
            ReferralRepository::pending(next_id(&ledger.referrals), referral, Utc::now());
        ledger.referrals.push(referral.clone());
        drop(ledger);

        self.invalidate().await;

        Ok(referral)
    }

    /// Converts a referral into a paying customer and books the affiliate's commission.
    ///
    /// The commission is `subscription_value * commission_rate` and starts out pending.
    ///
    /// # Returns
    /// - `Ok(ReferralConversionDto)` - The converted referral and its new commission
    /// - `Err(Error::ValidationError)` - The referral was converted before
    /// - `Err(Error::ResourceError)` - Unknown referral, or its affiliate no longer exists
    pub async fn convert_referral(
        &self,
        referral_id: i32,
        conversion: ConvertReferralDto,
    ) -> Result<ReferralConversionDto, Error> {
        Latency::Write.simulate(&self.state.config).await;

        let now = Utc::now();
        let mut ledger = AffiliateRepository::new(&self.state.db).ledger().await;
        let commission_id = next_id(&ledger.commissions);

        let referral = ledger
            .referrals
            .iter_mut()
            .find(|referral| referral.id == referral_id)
            .ok_or(ResourceError::ReferralNotFound(referral_id))?;
        if referral.status == ReferralStatus::Converted {
            return Err(ValidationError::ReferralAlreadyConverted(referral_id).into());
        }
        let affiliate = ledger
            .affiliates
            .iter_mut()
            .find(|affiliate| affiliate.id == referral.affiliate_id)
            .ok_or(ResourceError::AffiliateNotFound(referral.affiliate_id))?;

        let amount = conversion.subscription_value * affiliate.commission_rate;

        referral.status = ReferralStatus::Converted;
        referral.subscription_plan = Some(conversion.subscription_plan.clone());
        referral.subscription_value = conversion.subscription_value;
        referral.commission_earned = amount;
        referral.conversion_date = Some(now);

        affiliate.successful_referrals += 1;
        affiliate.pending_commissions += amount;

        let commission = Commission {
            id: commission_id,
            affiliate_id: affiliate.id,
            referral_id,
            amount,
            date: now,
            status: CommissionStatus::Pending,
            payout_date: None,
            subscription_plan: Some(conversion.subscription_plan),
            customer_name: referral.name.clone(),
        };
        let referral = referral.clone();
        ledger.commissions.push(commission.clone());
        drop(ledger);

        self.invalidate().await;

        Ok(ReferralConversionDto {
            referral,
            commission,
        })
    }

    pub async fn get_all_commissions(&self) -> Result<Vec<Commission>, Error> {
        Latency::Query.simulate(&self.state.config).await;

        Ok(CommissionRepository::new(&self.state.db).get_all().await)
    }

    pub async fn get_commissions_by_affiliate(
        &self,
        affiliate_id: i32,
    ) -> Result<Vec<Commission>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(CommissionRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await)
    }

    pub async fn get_commission_by_id(&self, id: i32) -> Result<Option<Commission>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(CommissionRepository::new(&self.state.db).get_by_id(id).await)
    }

    pub async fn get_all_payouts(&self) -> Result<Vec<Payout>, Error> {
        Latency::Query.simulate(&self.state.config).await;

        Ok(PayoutRepository::new(&self.state.db).get_all().await)
    }

    pub async fn get_payouts_by_affiliate(&self, affiliate_id: i32) -> Result<Vec<Payout>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(PayoutRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await)
    }

    /// Pays out pending commissions to an affiliate.
    ///
    /// Every pending commission of the affiliate is marked paid, the paid amount moves from
    /// pending commissions to total earnings and a completed payout is recorded.
    ///
    /// # Returns
    /// - `Ok(Payout)` - The recorded payout
    /// - `Err(Error::ValidationError)` - Amount is below the $50 minimum or above the
    ///   affiliate's pending commissions
    /// - `Err(Error::ResourceError)` - No affiliate with that id
    pub async fn create_payout(
        &self,
        affiliate_id: i32,
        request: AffiliatePayoutRequestDto,
    ) -> Result<Payout, Error> {
        Latency::Heavy.simulate(&self.state.config).await;

        let amount = request.amount;
        let now = Utc::now();
        let mut ledger = AffiliateRepository::new(&self.state.db).ledger().await;
        let payout_id = next_id(&ledger.payouts);

        let affiliate = ledger
            .affiliates
            .iter_mut()
            .find(|affiliate| affiliate.id == affiliate_id)
            .ok_or(ResourceError::AffiliateNotFound(affiliate_id))?;

        if !(amount.is_finite() && amount >= MINIMUM_PAYOUT) {
            return Err(ValidationError::MinimumPayout.into());
        }
        if amount > affiliate.pending_commissions {
            return Err(ValidationError::PayoutExceedsPendingCommissions.into());
        }

        affiliate.pending_commissions -= amount;
        affiliate.total_earnings += amount;
        affiliate.last_payout_date = Some(now);

        let mut commissions_included = 0;
        for commission in ledger.commissions.iter_mut().filter(|commission| {
            commission.affiliate_id == affiliate_id
                && commission.status == CommissionStatus::Pending
        }) {
            commission.status = CommissionStatus::Paid;
            commission.payout_date = Some(now);
            commissions_included += 1;
        }

        let payout = Payout {
            id: payout_id,
            affiliate_id,
            amount,
            date: now,
            status: PayoutStatus::Completed,
            method: request
                .method
                .filter(|method| !method.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PAYOUT_METHOD.to_string()),
            transaction_id: format!("TXN_{}_{}", now.timestamp_millis(), affiliate_id),
            commissions_included,
        };
        ledger.payouts.push(payout.clone());
        drop(ledger);

        self.invalidate().await;

        Ok(payout)
    }

    /// Aggregates an affiliate's referral, commission and payout history.
    pub async fn get_affiliate_stats(&self, affiliate_id: i32) -> Result<AffiliateStatsDto, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let affiliate = AffiliateRepository::new(&self.state.db)
            .get_by_id(affiliate_id)
            .await
            .ok_or(ResourceError::AffiliateNotFound(affiliate_id))?;
        let referrals = ReferralRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await;
        let commissions = CommissionRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await;
        let payouts = PayoutRepository::new(&self.state.db)
            .get_by_affiliate(affiliate_id)
            .await;

        Ok(affiliate_stats(&affiliate, &referrals, &commissions, &payouts))
    }

    /// The `limit` affiliates with the highest total earnings.
    pub async fn get_top_performers(&self, limit: usize) -> Result<Vec<Affiliate>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        let mut affiliates = AffiliateRepository::new(&self.state.db).get_all().await;
        affiliates.sort_by(|a, b| b.total_earnings.total_cmp(&a.total_earnings));
        affiliates.truncate(limit);

        Ok(affiliates)
    }

    pub fn generate_referral_link(&self, referral_code: &str) -> ReferralLinkDto {
        ReferralLinkDto {
            referral_code: referral_code.to_string(),
            link: referral_link(referral_code),
        }
    }

    /// Finds the active affiliate owning `code`, `None` for unknown or inactive codes.
    pub async fn validate_referral_code(&self, code: &str) -> Result<Option<Affiliate>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(AffiliateRepository::new(&self.state.db)
            .find_active_by_referral_code(code)
            .await)
    }

    async fn invalidate(&self) {
        self.state.cache.affiliates.lock().await.clear();
        self.state.cache.affiliate.lock().await.clear();
    }
}

fn affiliate_stats(
    affiliate: &Affiliate,
    referrals: &[Referral],
    commissions: &[Commission],
    payouts: &[Payout],
) -> AffiliateStatsDto {
    let converted = referrals
        .iter()
        .filter(|r| r.status == ReferralStatus::Converted)
        .count();
    let pending = referrals
        .iter()
        .filter(|r| r.status == ReferralStatus::Pending)
        .count();
    let sum_with = |status: Option<CommissionStatus>| -> f64 {
        commissions
            .iter()
            .filter(|c| status.is_none_or(|status| c.status == status))
            .map(|c| c.amount)
            .sum()
    };
    let total_commissions = sum_with(None);

    AffiliateStatsDto {
        total_referrals: referrals.len(),
        converted_referrals: converted,
        pending_referrals: pending,
        conversion_rate: if referrals.is_empty() {
            0.0
        } else {
            converted as f64 / referrals.len() as f64 * 100.0
        },
        total_commissions,
        paid_commissions: sum_with(Some(CommissionStatus::Paid)),
        pending_commissions: sum_with(Some(CommissionStatus::Pending)),
        avg_commission_value: if commissions.is_empty() {
            0.0
        } else {
            total_commissions / commissions.len() as f64
        },
        total_payouts: payouts.iter().map(|p| p.amount).sum(),
        last_payout_date: affiliate.last_payout_date,
    }
}
