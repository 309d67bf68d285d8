use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::prelude::{Campaign, CampaignStatus};
use influencehub::{
    model::{api::ErrorDto, page::{Page, PageQuery}},
    server::controller::campaign::{accept_campaign, decline_campaign, get_campaign, get_campaigns},
};

use super::*;

/// Expected: 200 OK with the requested slice and the full table size as total
#[tokio::test]
async fn get_campaigns_returns_requested_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(7).build()?;

    let result = get_campaigns(State(app_state(&test)), Query(PageQuery::new(2, 3))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Campaign> = json_body(resp).await;
    assert_eq!(page.total, 7);
    assert_eq!(page.items.len(), 3);
    assert!(page.has_more);

    Ok(())
}

/// Expected: 404 Not Found with the static error message
#[tokio::test]
async fn get_campaign_unknown_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(2).build()?;

    let result = get_campaign(State(app_state(&test)), Path(99)).await;

    let resp = result.err().expect("unknown campaign should fail").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Campaign not found");

    Ok(())
}

/// Expected: accepting and declining update the stored status
#[tokio::test]
async fn accept_and_decline_change_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(2).build()?;
    let state = app_state(&test);

    let accepted = accept_campaign(State(state.clone()), Path(1)).await.unwrap().into_response();
    assert_eq!(accepted.status(), StatusCode::OK);
    let accepted: Campaign = json_body(accepted).await;
    assert_eq!(accepted.status, CampaignStatus::Accepted);

    decline_campaign(State(state.clone()), Path(2)).await.unwrap();
    let declined = get_campaign(State(state), Path(2)).await.unwrap().into_response();
    let declined: Campaign = json_body(declined).await;
    assert_eq!(declined.status, CampaignStatus::Declined);

    Ok(())
}
