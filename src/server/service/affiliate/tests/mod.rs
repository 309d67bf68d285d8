mod affiliate;
mod payout;
mod referral;
mod stats;

use entity::prelude::AffiliateStatus;
use influencehub_test_utils::prelude::*;

use super::*;

/// Affiliate 1 with two pending commissions and one paid one, plus an inactive affiliate 2
fn affiliate_program() -> TestBuilder {
    TestBuilder::new()
        .with_affiliate(Affiliate {
            pending_commissions: 120.0,
            total_earnings: 40.0,
            total_referrals: 3,
            successful_referrals: 3,
            ..factory::affiliate(1)
        })
        .with_affiliate(Affiliate {
            status: AffiliateStatus::Inactive,
            total_earnings: 500.0,
            ..factory::affiliate(2)
        })
        .with_referral(Referral {
            status: ReferralStatus::Converted,
            ..factory::referral(1, 1)
        })
        .with_referral(Referral {
            status: ReferralStatus::Converted,
            ..factory::referral(2, 1)
        })
        .with_referral(Referral {
            status: ReferralStatus::Converted,
            ..factory::referral(3, 1)
        })
        .with_referral(factory::referral(4, 1))
        .with_commission(Commission {
            payout_date: Some(factory::day(5)),
            ..factory::commission(1, 1, 40.0, CommissionStatus::Paid)
        })
        .with_commission(factory::commission(2, 1, 70.0, CommissionStatus::Pending))
        .with_commission(factory::commission(3, 1, 50.0, CommissionStatus::Pending))
        .with_payout(factory::payout(1, 1, 40.0))
}
