use super::*;

/// Expect accept and decline to set the campaign status
#[tokio::test]
async fn accept_and_decline_set_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(2).build()?;
    let state: AppState = test.state();
    let campaign_service = CampaignService::new(&state);

    let accepted = campaign_service.accept(1).await.unwrap();
    let declined = campaign_service.decline(2).await.unwrap();

    assert_eq!(accepted.status, CampaignStatus::Accepted);
    assert_eq!(declined.status, CampaignStatus::Declined);
    assert_eq!(
        campaign_service.get_by_id(1).await.unwrap().status,
        CampaignStatus::Accepted
    );

    Ok(())
}
