use super::*;

/// Expect the daily cost to scale linearly with the multiplier
#[tokio::test]
async fn calculates_daily_cost() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product(factory::product(1)).build()?;
    let state: AppState = test.state();

    let cost = ProductService::new(&state)
        .calculate_boost(1, 2.5)
        .await
        .unwrap();

    assert_eq!(cost.daily_cost, 25.0);

    Ok(())
}

/// Expect activation to flag the product and report the visibility increase
#[tokio::test]
async fn activates_boost() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product(factory::product(1)).build()?;
    let state: AppState = test.state();
    let product_service = ProductService::new(&state);

    let activation = product_service.activate_boost(1, 2.0).await.unwrap();

    assert!(activation.success);
    assert_eq!(activation.cost, 20.0);
    assert_eq!(activation.visibility_increase, 100.0);

    let product = product_service.get_by_id(1).await.unwrap();
    assert!(product.boost_active);
    assert_eq!(product.boost_multiplier, 2.0);
    assert!(product.boost_activated_at.is_some());

    Ok(())
}

/// Expect non-positive multipliers and unknown products to be rejected
#[tokio::test]
async fn rejects_invalid_boosts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product(factory::product(1)).build()?;
    let state: AppState = test.state();
    let product_service = ProductService::new(&state);

    assert!(matches!(
        product_service.activate_boost(1, 0.0).await,
        Err(Error::ValidationError(ValidationError::InvalidBoostMultiplier))
    ));
    assert!(matches!(
        product_service.calculate_boost(1, f64::NAN).await,
        Err(Error::ValidationError(ValidationError::InvalidBoostMultiplier))
    ));
    assert!(matches!(
        product_service.activate_boost(9, 1.5).await,
        Err(Error::ResourceError(ResourceError::ProductNotFound(9)))
    ));
    assert!(!product_service.get_by_id(1).await.unwrap().boost_active);

    Ok(())
}
