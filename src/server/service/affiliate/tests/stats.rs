use super::*;

/// Expect referral counts, commission sums and payouts to be aggregated
#[tokio::test]
async fn aggregates_affiliate_history() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();

    let stats = AffiliateService::new(&state)
        .get_affiliate_stats(1)
        .await
        .unwrap();

    assert_eq!(stats.total_referrals, 4);
    assert_eq!(stats.converted_referrals, 3);
    assert_eq!(stats.pending_referrals, 1);
    assert_eq!(stats.conversion_rate, 75.0);
    assert_eq!(stats.total_commissions, 160.0);
    assert_eq!(stats.paid_commissions, 40.0);
    assert_eq!(stats.pending_commissions, 120.0);
    assert_eq!(stats.total_payouts, 40.0);

    Ok(())
}

/// Expect zero rates for an affiliate without history
#[tokio::test]
async fn empty_history_has_zero_rates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_affiliate(factory::affiliate(1))
        .build()?;
    let state: AppState = test.state();

    let stats = AffiliateService::new(&state)
        .get_affiliate_stats(1)
        .await
        .unwrap();

    assert_eq!(stats.conversion_rate, 0.0);
    assert_eq!(stats.avg_commission_value, 0.0);

    Ok(())
}

/// Expect top performers ordered by total earnings
#[tokio::test]
async fn ranks_top_performers() -> Result<(), TestError> {
    let test = affiliate_program()
        .with_affiliate(Affiliate {
            total_earnings: 90.0,
            ..factory::affiliate(3)
        })
        .build()?;
    let state: AppState = test.state();

    let top = AffiliateService::new(&state)
        .get_top_performers(2)
        .await
        .unwrap();

    let ids: Vec<i32> = top.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3]);

    Ok(())
}
