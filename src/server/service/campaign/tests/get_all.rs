use super::*;

/// Expect the first page with the full table length as total
#[tokio::test]
async fn returns_requested_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(45).build()?;
    let state: AppState = test.state();

    let campaign_service = CampaignService::new(&state);
    let result = campaign_service.get_all(PageQuery::default()).await;

    assert!(result.is_ok());
    let page = result.unwrap();
    assert_eq!(page.items.len(), 20);
    assert_eq!(page.total, 45);
    assert!(page.has_more);
    assert_eq!(page.items[0].id, 1);

    Ok(())
}

/// Expect the last partial page to report no more items
#[tokio::test]
async fn returns_last_partial_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(45).build()?;
    let state: AppState = test.state();

    let campaign_service = CampaignService::new(&state);
    let page = campaign_service
        .get_all(PageQuery::new(3, 20))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 5);
    assert!(!page.has_more);

    Ok(())
}

/// Expect a cached page to be served until a write invalidates it
#[tokio::test]
async fn serves_cached_page_until_write() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(3).build()?;
    let state: AppState = test.state();
    let campaign_service = CampaignService::new(&state);

    campaign_service.get_all(PageQuery::default()).await.unwrap();

    // Bypass the service so the cache is not invalidated
    CampaignRepository::new(&state.db).delete(1).await;
    let cached = campaign_service.get_all(PageQuery::default()).await.unwrap();
    assert_eq!(cached.total, 3);

    let uncached = campaign_service
        .get_all(PageQuery {
            use_cache: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(uncached.total, 2);

    campaign_service.delete(2).await.unwrap();
    let refreshed = campaign_service.get_all(PageQuery::default()).await.unwrap();
    assert_eq!(refreshed.total, 1);

    Ok(())
}

/// Expect mutating a returned campaign to leave the stored one untouched
#[tokio::test]
async fn returns_copies() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(1).build()?;
    let state: AppState = test.state();
    let campaign_service = CampaignService::new(&state);

    let mut page = campaign_service.get_all(PageQuery::default()).await.unwrap();
    page.items[0].product_name = "Changed".to_string();

    let stored = campaign_service.get_by_id(1).await.unwrap();
    assert_eq!(stored.product_name, "Product 1");

    Ok(())
}
