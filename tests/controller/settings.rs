use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Settings, SocialPlatform, SubscriptionTier};
use influencehub::{
    model::{
        api::ErrorDto,
        settings::{PasswordChangeDto, SocialAccountChangeDto, SubscriptionChangeDto},
    },
    server::controller::settings::{
        connect_social_account, update_password, update_subscription_tier,
    },
};

use super::*;

/// Expected: 204 No Content with the seeded password
#[tokio::test]
async fn update_password_with_current_password() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let resp = update_password(
        State(app_state(&test)),
        Json(PasswordChangeDto {
            current_password: "currentpass123".to_string(),
            new_password: "newpassword456".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expected: 400 Bad Request when the current password does not match
#[tokio::test]
async fn update_password_rejects_wrong_current_password() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = update_password(
        State(app_state(&test)),
        Json(PasswordChangeDto {
            current_password: "wrong".to_string(),
            new_password: "newpassword456".to_string(),
        }),
    )
    .await;

    let resp = result.err().expect("wrong password should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Current password is incorrect");

    Ok(())
}

/// Expected: the new tier brings its slot limit
#[tokio::test]
async fn subscription_change_updates_slot_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings(factory::settings(SubscriptionTier::Free, 1))
        .build()?;

    let resp = update_subscription_tier(
        State(app_state(&test)),
        Json(SubscriptionChangeDto {
            tier: "growth".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let settings: Settings = json_body(resp).await;

    assert_eq!(settings.subscription_tier, SubscriptionTier::Growth);
    assert_eq!(settings.total_slots, 10);
    assert_eq!(settings.used_slots, 1);

    Ok(())
}

/// Expected: 400 Bad Request for a tier outside the catalogue
#[tokio::test]
async fn subscription_change_rejects_unknown_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = update_subscription_tier(
        State(app_state(&test)),
        Json(SubscriptionChangeDto {
            tier: "platinum".to_string(),
        }),
    )
    .await;

    let resp = result.err().expect("unknown tier should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: connecting links the account, an unsupported platform is a 400
#[tokio::test]
async fn connect_social_account_by_platform_name() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state = app_state(&test);

    let resp = connect_social_account(State(state.clone()), Path("youtube".to_string()))
        .await
        .unwrap()
        .into_response();
    let change: SocialAccountChangeDto = json_body(resp).await;
    assert_eq!(change.platform, SocialPlatform::Youtube);
    assert!(change.account.connected);
    assert!(!change.meets_verification_minimum);

    let result = connect_social_account(State(state), Path("myspace".to_string())).await;
    let resp = result.err().expect("unsupported platform should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
