use super::*;

/// Expect the campaign with the requested id
#[tokio::test]
async fn returns_campaign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(3).build()?;
    let state: AppState = test.state();

    let campaign_service = CampaignService::new(&state);
    let result = campaign_service.get_by_id(2).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().product_name, "Product 2");

    Ok(())
}

/// Expect a not found error for an unknown id
#[tokio::test]
async fn fails_for_unknown_campaign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(3).build()?;
    let state: AppState = test.state();

    let campaign_service = CampaignService::new(&state);
    let result = campaign_service.get_by_id(99).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::CampaignNotFound(99)))
    ));

    Ok(())
}
