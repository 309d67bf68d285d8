use super::*;

/// Expect a pending referral counted towards the affiliate
#[tokio::test]
async fn creates_pending_referral() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let referral = affiliate_service
        .create_referral(NewReferralDto {
            affiliate_id: 1,
            name: "Taylor Quinn".to_string(),
            email: "taylor@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(referral.id, 5);
    assert_eq!(referral.status, ReferralStatus::Pending);
    assert!(referral.subscription_plan.is_none());

    let affiliate = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(affiliate.total_referrals, 4);
    assert_eq!(
        affiliate_service.get_referrals_by_affiliate(1).await.unwrap().len(),
        5
    );

    Ok(())
}

/// Expect referrals for unknown affiliates to be rejected
#[tokio::test]
async fn rejects_referral_for_unknown_affiliate() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let result = affiliate_service
        .create_referral(NewReferralDto {
            affiliate_id: 77,
            name: "Nobody".to_string(),
            email: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::AffiliateNotFound(77)))
    ));
    assert_eq!(affiliate_service.get_all_referrals().await.unwrap().len(), 4);

    Ok(())
}

/// Expect conversion to book a pending commission at the affiliate's rate
#[tokio::test]
async fn converts_referral() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let conversion = affiliate_service
        .convert_referral(
            4,
            ConvertReferralDto {
                subscription_plan: "Growth".to_string(),
                subscription_value: 59.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(conversion.referral.status, ReferralStatus::Converted);
    assert_eq!(conversion.referral.commission_earned, 29.5);
    assert!(conversion.referral.conversion_date.is_some());
    assert_eq!(conversion.commission.id, 4);
    assert_eq!(conversion.commission.amount, 29.5);
    assert_eq!(conversion.commission.status, CommissionStatus::Pending);
    assert_eq!(conversion.commission.customer_name, "Customer 4");

    let affiliate = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(affiliate.successful_referrals, 4);
    assert_eq!(affiliate.pending_commissions, 149.5);

    Ok(())
}

/// Expect a converted referral to be rejected without booking a second commission
#[tokio::test]
async fn rejects_converting_referral_twice() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let result = affiliate_service
        .convert_referral(
            1,
            ConvertReferralDto {
                subscription_plan: "Growth".to_string(),
                subscription_value: 59.0,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::ReferralAlreadyConverted(1)))
    ));
    assert_eq!(affiliate_service.get_all_commissions().await.unwrap().len(), 3);

    let affiliate = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(affiliate.successful_referrals, 3);
    assert_eq!(affiliate.pending_commissions, 120.0);

    Ok(())
}

/// Expect unknown referrals to fail conversion
#[tokio::test]
async fn fails_to_convert_unknown_referral() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();

    let result = AffiliateService::new(&state)
        .convert_referral(
            99,
            ConvertReferralDto {
                subscription_plan: "Pro".to_string(),
                subscription_value: 99.0,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::ReferralNotFound(99)))
    ));

    Ok(())
}
