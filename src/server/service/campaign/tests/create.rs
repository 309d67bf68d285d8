use entity::prelude::{CommissionType, Niche};

use super::*;

fn new_campaign() -> NewCampaignDto {
    NewCampaignDto {
        product_name: "Trail Runner".to_string(),
        store_name: "Peak Outfitters".to_string(),
        niche: Niche::Sports,
        commission_type: CommissionType::PerSale,
        commission_value: 12.0,
        deadline: None,
        description: "Review our new trail shoe".to_string(),
        product_image: None,
    }
}

/// Expect a pending campaign with the next free id and zeroed counters
#[tokio::test]
async fn creates_pending_campaign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(2).build()?;
    let state: AppState = test.state();

    let campaign_service = CampaignService::new(&state);
    let result = campaign_service.create(new_campaign()).await;

    assert!(result.is_ok());
    let campaign = result.unwrap();
    assert_eq!(campaign.id, 3);
    assert_eq!(campaign.status, CampaignStatus::Pending);
    assert_eq!(campaign.views, 0);
    assert_eq!(campaign.applications, 0);

    let stored = campaign_service.get_by_id(3).await.unwrap();
    assert_eq!(stored, campaign);

    Ok(())
}

/// Expect id 1 when the table is empty
#[tokio::test]
async fn first_campaign_gets_id_one() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let campaign = CampaignService::new(&state)
        .create(new_campaign())
        .await
        .unwrap();

    assert_eq!(campaign.id, 1);

    Ok(())
}
