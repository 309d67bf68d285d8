use super::*;

fn request(amount: f64) -> AffiliatePayoutRequestDto {
    AffiliatePayoutRequestDto {
        amount,
        method: None,
    }
}

/// Expect a payout to settle every pending commission
#[tokio::test]
async fn pays_out_pending_commissions() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let payout = affiliate_service.create_payout(1, request(100.0)).await.unwrap();

    assert_eq!(payout.id, 2);
    assert_eq!(payout.amount, 100.0);
    assert_eq!(payout.method, "bank_transfer");
    assert_eq!(payout.commissions_included, 2);
    assert!(payout.transaction_id.starts_with("TXN_"));
    assert!(payout.transaction_id.ends_with("_1"));

    let affiliate = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(affiliate.pending_commissions, 20.0);
    assert_eq!(affiliate.total_earnings, 140.0);
    assert!(affiliate.last_payout_date.is_some());

    let commissions = affiliate_service.get_commissions_by_affiliate(1).await.unwrap();
    assert!(commissions
        .iter()
        .all(|c| c.status == CommissionStatus::Paid && c.payout_date.is_some()));

    Ok(())
}

/// Expect payouts above pending commissions to be rejected without changes
#[tokio::test]
async fn rejects_payout_above_pending() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let result = affiliate_service.create_payout(1, request(500.0)).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(
            ValidationError::PayoutExceedsPendingCommissions
        ))
    ));
    let affiliate = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(affiliate.pending_commissions, 120.0);
    assert_eq!(affiliate_service.get_payouts_by_affiliate(1).await.unwrap().len(), 1);

    Ok(())
}

/// Expect payouts below the minimum to be rejected
#[tokio::test]
async fn rejects_payout_below_minimum() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();

    let result = AffiliateService::new(&state)
        .create_payout(1, request(25.0))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MinimumPayout))
    ));

    Ok(())
}

/// Expect a not found error for unknown affiliates
#[tokio::test]
async fn fails_for_unknown_affiliate() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();

    let result = AffiliateService::new(&state)
        .create_payout(5, request(60.0))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::AffiliateNotFound(5)))
    ));

    Ok(())
}
