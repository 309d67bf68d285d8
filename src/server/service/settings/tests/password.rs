use super::*;

/// Expect the password to change once and the old password to stop working
#[tokio::test]
async fn replaces_password_when_current_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();
    let settings_service = SettingsService::new(&state);

    settings_service
        .update_password("currentpass123", "newpassword1".to_string())
        .await
        .unwrap();

    let result = settings_service
        .update_password("currentpass123", "another-pass".to_string())
        .await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::IncorrectPassword))
    ));

    Ok(())
}

/// Expect a wrong current password to be rejected
#[tokio::test]
async fn rejects_incorrect_current_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_password("s3cret-pass").build()?;
    let state: AppState = test.state();

    let result = SettingsService::new(&state)
        .update_password("currentpass123", "newpassword1".to_string())
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::IncorrectPassword))
    ));

    Ok(())
}

/// Expect passwords shorter than eight characters to be rejected
#[tokio::test]
async fn rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let result = SettingsService::new(&state)
        .update_password("currentpass123", "short".to_string())
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::WeakPassword(8)))
    ));

    Ok(())
}
