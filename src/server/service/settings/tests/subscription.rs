use super::*;

/// Expect an upgrade to raise the slot limit and schedule billing
#[tokio::test]
async fn upgrade_sets_slots_and_billing_date() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let settings = SettingsService::new(&state)
        .update_subscription_tier("growth")
        .await
        .unwrap();

    assert_eq!(settings.subscription_tier, SubscriptionTier::Growth);
    assert_eq!(settings.total_slots, 10);
    assert!(settings.next_billing_date.is_some_and(|date| date > Utc::now()));

    Ok(())
}

/// Expect a downgrade to clamp used slots and clear the billing date
#[tokio::test]
async fn downgrade_clamps_used_slots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings(factory::settings(SubscriptionTier::Growth, 7))
        .build()?;
    let state: AppState = test.state();

    let settings = SettingsService::new(&state)
        .update_subscription_tier("free")
        .await
        .unwrap();

    assert_eq!(settings.total_slots, 2);
    assert_eq!(settings.used_slots, 2);
    assert_eq!(settings.next_billing_date, None);

    Ok(())
}

/// Expect an unknown tier to be rejected without changes
#[tokio::test]
async fn rejects_unknown_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();
    let settings_service = SettingsService::new(&state);

    let result = settings_service.update_subscription_tier("platinum").await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidSubscriptionTier(ref tier)))
            if tier == "platinum"
    ));
    assert_eq!(
        settings_service.get_settings().await.unwrap().subscription_tier,
        SubscriptionTier::Free
    );

    Ok(())
}

/// Expect four plans with growing slot counts
#[tokio::test]
async fn lists_plan_catalogue() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let tiers = SettingsService::new(&state)
        .get_subscription_tiers()
        .await
        .unwrap();

    let slots: Vec<u32> = tiers.iter().map(|tier| tier.slots).collect();
    assert_eq!(slots, vec![2, 5, 10, 999]);
    assert_eq!(tiers[1].price, 29.0);
    assert_eq!(tiers[3].name, "Pro");
    assert!(tiers.iter().all(|tier| !tier.features.is_empty()));

    Ok(())
}
