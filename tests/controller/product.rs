use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{CommissionType, EngagementTier, Niche, Product};
use influencehub::{
    model::{
        api::ErrorDto,
        product::{BoostCostDto, BoostRequestDto, InfluencerMatch, MatchCriteria, NewProductDto},
    },
    server::controller::product::{
        activate_boost, create_product, get_boost_cost, get_product, get_recommendations,
    },
};

use super::*;

fn new_product(name: &str) -> NewProductDto {
    NewProductDto {
        name: name.to_string(),
        price: 29.99,
        niche: Niche::Beauty,
        description: "Serum for glowing skin".to_string(),
        images: Vec::new(),
        commission_type: CommissionType::PerSale,
        commission_value: 12.0,
        smart_match: false,
        target_audience: None,
        content_style: None,
        engagement_tier: None,
        quality_score: None,
    }
}

/// Expected: 201 Created with the next free id
#[tokio::test]
async fn create_product_assigns_next_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product(factory::product(1))
        .with_product(factory::product(4))
        .build()?;

    let result = create_product(State(app_state(&test)), Json(new_product("Glow Serum"))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Product = json_body(resp).await;
    assert_eq!(product.id, 5);
    assert_eq!(product.name, "Glow Serum");

    Ok(())
}

/// Expected: 400 Bad Request when a required field is blank
#[tokio::test]
async fn create_product_requires_name() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = create_product(State(app_state(&test)), Json(new_product("  "))).await;

    let resp = result.err().expect("blank name should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Please fill in all required fields");

    Ok(())
}

/// Expected: boost cost scales with the multiplier and activation marks the product boosted
#[tokio::test]
async fn boost_cost_then_activation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product(factory::product(1)).build()?;
    let state = app_state(&test);

    let cost = get_boost_cost(
        State(state.clone()),
        Path(1),
        Query(BoostRequestDto { multiplier: 2.0 }),
    )
    .await
    .unwrap()
    .into_response();
    let cost: BoostCostDto = json_body(cost).await;
    assert_eq!(cost.daily_cost, 20.0);

    activate_boost(
        State(state.clone()),
        Path(1),
        Json(BoostRequestDto { multiplier: 2.0 }),
    )
    .await
    .unwrap();

    let product = get_product(State(state), Path(1)).await.unwrap().into_response();
    let product: Product = json_body(product).await;
    assert!(product.boost_active);
    assert_eq!(product.boost_multiplier, 2.0);

    Ok(())
}

/// Expected: 404 Not Found when boosting an unknown product
#[tokio::test]
async fn boost_cost_unknown_product_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = get_boost_cost(
        State(app_state(&test)),
        Path(3),
        Query(BoostRequestDto { multiplier: 1.5 }),
    )
    .await;

    let resp = result.err().expect("unknown product should fail").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: recommendations are scored between 0 and 100 and sorted best first
#[tokio::test]
async fn recommendations_are_sorted_by_score() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let criteria = MatchCriteria {
        niche: Some(Niche::Fitness),
        engagement_tier: EngagementTier::High,
        quality_score: 4,
        ..MatchCriteria::default()
    };

    let resp = get_recommendations(State(app_state(&test)), Json(criteria))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let matches: Vec<InfluencerMatch> = json_body(resp).await;

    assert!(!matches.is_empty());
    assert!(matches
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
    assert!(matches
        .iter()
        .all(|m| (0.0..=100.0).contains(&m.match_score)));

    Ok(())
}
