use entity::prelude::{Affiliate, Commission, Payout, Referral};

use super::Method;
use crate::model::affiliate::{AffiliatePayoutRequestDto, AffiliateStatsDto, ReferralLinkDto};

pub async fn get_affiliate(id: i32) -> Result<Affiliate, String> {
    super::get(&format!("/api/affiliates/{}", id)).await
}

pub async fn get_affiliate_stats(id: i32) -> Result<AffiliateStatsDto, String> {
    super::get(&format!("/api/affiliates/{}/stats", id)).await
}

pub async fn get_referral_link(id: i32) -> Result<ReferralLinkDto, String> {
    super::get(&format!("/api/affiliates/{}/link", id)).await
}

pub async fn get_affiliate_referrals(id: i32) -> Result<Vec<Referral>, String> {
    super::get(&format!("/api/affiliates/{}/referrals", id)).await
}

pub async fn get_affiliate_commissions(id: i32) -> Result<Vec<Commission>, String> {
    super::get(&format!("/api/affiliates/{}/commissions", id)).await
}

pub async fn get_affiliate_payouts(id: i32) -> Result<Vec<Payout>, String> {
    super::get(&format!("/api/affiliates/{}/payouts", id)).await
}

pub async fn create_payout(id: i32, amount: f64) -> Result<Payout, String> {
    let request = AffiliatePayoutRequestDto {
        amount,
        method: None,
    };
    super::send(Method::Post, &format!("/api/affiliates/{}/payouts", id), &request).await
}

pub async fn get_top_performers(limit: usize) -> Result<Vec<Affiliate>, String> {
    super::get(&format!("/api/affiliates/top?limit={}", limit)).await
}
