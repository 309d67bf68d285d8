use super::*;

/// Expect a connection to be unverified with a handle derived from the profile name
#[tokio::test]
async fn connects_platform() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let change = SettingsService::new(&state)
        .connect_social_account(SocialPlatform::Youtube)
        .await
        .unwrap();

    assert_eq!(change.platform, SocialPlatform::Youtube);
    assert!(change.account.connected);
    assert!(!change.account.verified);
    assert_eq!(change.account.username, "testuser");
    assert_eq!(change.account.follower_count, 0);
    assert!(!change.meets_verification_minimum);

    Ok(())
}

/// Expect the verification minimum to follow the number of connected platforms
#[tokio::test]
async fn tracks_verification_minimum() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();
    let settings_service = SettingsService::new(&state);

    settings_service
        .connect_social_account(SocialPlatform::Tiktok)
        .await
        .unwrap();
    let change = settings_service
        .connect_social_account(SocialPlatform::Instagram)
        .await
        .unwrap();
    assert!(change.meets_verification_minimum);

    let change = settings_service
        .disconnect_social_account(SocialPlatform::Tiktok)
        .await
        .unwrap();
    assert!(!change.account.connected);
    assert!(change.account.username.is_empty());
    assert!(!change.meets_verification_minimum);

    let settings = settings_service.get_settings().await.unwrap();
    assert_eq!(
        settings.social_accounts.connected_platforms(),
        vec![SocialPlatform::Instagram]
    );

    Ok(())
}
