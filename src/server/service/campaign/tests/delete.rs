use super::*;

/// Expect the campaign to be gone after deletion
#[tokio::test]
async fn removes_campaign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(2).build()?;
    let state: AppState = test.state();
    let campaign_service = CampaignService::new(&state);

    let result = campaign_service.delete(1).await;

    assert!(result.is_ok());
    assert!(campaign_service.get_by_id(1).await.is_err());
    assert!(campaign_service.get_by_id(2).await.is_ok());

    Ok(())
}

/// Expect a not found error when deleting twice
#[tokio::test]
async fn fails_for_deleted_campaign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(1).build()?;
    let state: AppState = test.state();
    let campaign_service = CampaignService::new(&state);

    campaign_service.delete(1).await.unwrap();
    let result = campaign_service.delete(1).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::CampaignNotFound(1)))
    ));

    Ok(())
}
