use super::*;

/// Expect affiliates to be paged 50 at a time by default
#[tokio::test]
async fn lists_affiliates_fifty_per_page() -> Result<(), TestError> {
    let mut builder = TestBuilder::new();
    for id in 1..=60 {
        builder = builder.with_affiliate(factory::affiliate(id));
    }
    let test = builder.build()?;
    let state: AppState = test.state();

    let page = AffiliateService::new(&state)
        .get_all(PageQuery::default())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 50);
    assert_eq!(page.limit, 50);
    assert_eq!(page.total, 60);
    assert!(page.has_more);

    Ok(())
}

/// Expect Some for a known affiliate and None for an unknown one
#[tokio::test]
async fn get_by_id_returns_option() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    assert_eq!(
        affiliate_service.get_by_id(1).await.unwrap().map(|a| a.id),
        Some(1)
    );
    assert!(affiliate_service.get_by_id(42).await.unwrap().is_none());

    Ok(())
}

/// Expect new affiliates to be active with zeroed counters and a generated code
#[tokio::test]
async fn creates_active_affiliate() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    // A cached miss for the next id must not hide the new affiliate
    assert!(affiliate_service.get_by_id(3).await.unwrap().is_none());

    let affiliate = affiliate_service
        .create(NewAffiliateDto {
            name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(affiliate.id, 3);
    assert_eq!(affiliate.status, AffiliateStatus::Active);
    assert_eq!(affiliate.commission_rate, 0.5);
    assert_eq!(affiliate.total_referrals, 0);
    assert!(affiliate
        .referral_code
        .starts_with(&format!("SR{}", Utc::now().year())));
    assert_eq!(affiliate.referral_code.len(), 9);
    assert_eq!(
        affiliate_service.get_by_id(3).await.unwrap(),
        Some(affiliate)
    );

    Ok(())
}

/// Expect update and delete to fail for unknown affiliates
#[tokio::test]
async fn update_and_delete_unknown_affiliate() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    assert!(matches!(
        affiliate_service.update(9, AffiliatePatchDto::default()).await,
        Err(Error::ResourceError(ResourceError::AffiliateNotFound(9)))
    ));
    assert!(matches!(
        affiliate_service.delete(9).await,
        Err(Error::ResourceError(ResourceError::AffiliateNotFound(9)))
    ));

    affiliate_service.delete(2).await.unwrap();
    assert!(affiliate_service.get_by_id(2).await.unwrap().is_none());

    Ok(())
}

/// Expect update and delete to drop a cached lookup of the same affiliate
#[tokio::test]
async fn writes_invalidate_cached_lookup() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let cached = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(cached.commission_rate, 0.5);

    affiliate_service
        .update(
            1,
            AffiliatePatchDto {
                name: Some("Jordan Blake".to_string()),
                commission_rate: Some(0.4),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = affiliate_service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(updated.name, "Jordan Blake");
    assert_eq!(updated.commission_rate, 0.4);

    affiliate_service.delete(1).await.unwrap();
    assert!(affiliate_service.get_by_id(1).await.unwrap().is_none());

    Ok(())
}

/// Expect only active affiliates to validate their referral code
#[tokio::test]
async fn validates_active_referral_codes() -> Result<(), TestError> {
    let test = affiliate_program().build()?;
    let state: AppState = test.state();
    let affiliate_service = AffiliateService::new(&state);

    let active = affiliate_service.validate_referral_code("AF2026001").await.unwrap();
    let inactive = affiliate_service.validate_referral_code("AF2026002").await.unwrap();
    let unknown = affiliate_service.validate_referral_code("NOPE").await.unwrap();

    assert_eq!(active.map(|a| a.id), Some(1));
    assert!(inactive.is_none());
    assert!(unknown.is_none());

    Ok(())
}

/// Expect the signup link to carry the referral code
#[tokio::test]
async fn generates_referral_link() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let link = AffiliateService::new(&state).generate_referral_link("JB2026417");

    assert_eq!(link.link, "https://influencehub.com/signup?ref=JB2026417");

    Ok(())
}
