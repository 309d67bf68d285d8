use super::*;

/// Expect only the patched fields to change
#[tokio::test]
async fn merges_patch_into_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();
    let settings_service = SettingsService::new(&state);

    let updated = settings_service
        .update_settings(SettingsPatchDto {
            bio: Some("Tech reviewer".to_string()),
            push_notifications: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.bio, "Tech reviewer");
    assert!(updated.push_notifications);
    assert_eq!(updated.full_name, "Test User");
    assert_eq!(settings_service.get_settings().await.unwrap(), updated);

    Ok(())
}

/// Expect the image url to be stored trimmed
#[tokio::test]
async fn stores_profile_image() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let updated = SettingsService::new(&state)
        .upload_profile_image(" https://cdn.example.com/me.png ".to_string())
        .await
        .unwrap();

    assert_eq!(
        updated.profile_image.as_deref(),
        Some("https://cdn.example.com/me.png")
    );

    Ok(())
}

/// Expect a blank image url to be rejected
#[tokio::test]
async fn rejects_blank_profile_image() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let result = SettingsService::new(&state)
        .upload_profile_image("  ".to_string())
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::EmptyImageUrl))
    ));

    Ok(())
}
