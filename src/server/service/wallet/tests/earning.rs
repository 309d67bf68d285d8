use super::*;

/// Expect an earning to credit the balance under the campaign's product name
#[tokio::test]
async fn credits_earning_for_listed_campaign() -> Result<(), TestError> {
    let test = funded_wallet(10.0)
        .with_campaign(factory::campaign(4))
        .build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    let transaction = wallet_service
        .add_earning(4, 25.5, "Launch video".to_string())
        .await
        .unwrap();

    assert_eq!(transaction.kind, TransactionType::Earning);
    assert_eq!(transaction.campaign_name, factory::campaign(4).product_name);
    assert_eq!(transaction.description, "Launch video");

    let wallet = wallet_service.get_wallet().await.unwrap();
    assert_eq!(wallet.available_balance, 35.5);
    assert_eq!(wallet.total_earned, 35.5);

    Ok(())
}

/// Expect unknown campaigns to be labelled by id
#[tokio::test]
async fn labels_unlisted_campaign_by_id() -> Result<(), TestError> {
    let test = funded_wallet(0.0).build()?;
    let state: AppState = test.state();

    let transaction = WalletService::new(&state)
        .add_earning(42, 10.0, "Bonus post".to_string())
        .await
        .unwrap();

    assert_eq!(transaction.campaign_name, "Campaign 42");

    Ok(())
}

/// Expect non-positive earnings to be rejected
#[tokio::test]
async fn rejects_non_positive_earning() -> Result<(), TestError> {
    let test = funded_wallet(0.0).build()?;
    let state: AppState = test.state();

    let result = WalletService::new(&state)
        .add_earning(1, 0.0, "Nothing".to_string())
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidEarningAmount))
    ));

    Ok(())
}
