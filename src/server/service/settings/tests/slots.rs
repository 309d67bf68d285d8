use super::*;

/// Expect slot usage to report remaining slots and percentage
#[tokio::test]
async fn reports_slot_usage() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings(factory::settings(SubscriptionTier::Starter, 2))
        .build()?;
    let state: AppState = test.state();

    let usage = SettingsService::new(&state).get_slot_usage().await.unwrap();

    assert_eq!(usage.used, 2);
    assert_eq!(usage.total, 5);
    assert_eq!(usage.remaining, 3);
    assert_eq!(usage.percentage, 40.0);

    Ok(())
}

/// Expect used slots up to the plan's limit to be accepted
#[tokio::test]
async fn updates_slot_usage_within_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let usage = SettingsService::new(&state)
        .update_slot_usage(2)
        .await
        .unwrap();

    assert_eq!(usage.remaining, 0);

    Ok(())
}

/// Expect usage above the plan's limit to be rejected without changes
#[tokio::test]
async fn rejects_usage_above_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings(factory::settings(SubscriptionTier::Free, 1))
        .build()?;
    let state: AppState = test.state();
    let settings_service = SettingsService::new(&state);

    let result = settings_service.update_slot_usage(3).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::SlotLimitExceeded))
    ));
    assert_eq!(settings_service.get_slot_usage().await.unwrap().used, 1);

    Ok(())
}
