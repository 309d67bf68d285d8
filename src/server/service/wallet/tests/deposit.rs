use super::*;

/// Expect a deposit without a method to be recorded as a PayPal deposit
#[tokio::test]
async fn deposits_via_paypal_by_default() -> Result<(), TestError> {
    let test = funded_wallet(100.0).build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    let transaction = wallet_service.add_deposit(50.0, None).await.unwrap();

    assert_eq!(transaction.kind, TransactionType::Deposit);
    assert_eq!(transaction.description, "Deposit via PayPal");

    let wallet = wallet_service.get_wallet().await.unwrap();
    assert_eq!(wallet.available_balance, 150.0);
    assert_eq!(wallet.total_earned, 100.0);

    Ok(())
}

/// Expect the given method to be named in the description
#[tokio::test]
async fn deposits_via_given_method() -> Result<(), TestError> {
    let test = funded_wallet(0.0).build()?;
    let state: AppState = test.state();

    let transaction = WalletService::new(&state)
        .add_deposit(20.0, Some("Card".to_string()))
        .await
        .unwrap();

    assert_eq!(transaction.description, "Deposit via Card");

    Ok(())
}

/// Expect zero and negative deposits to be rejected
#[tokio::test]
async fn rejects_invalid_amount() -> Result<(), TestError> {
    let test = funded_wallet(0.0).build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    for amount in [0.0, -5.0] {
        let result = wallet_service.add_deposit(amount, None).await;
        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidDepositAmount))
        ));
    }
    assert_eq!(wallet_service.get_transactions().await.unwrap().len(), 2);

    Ok(())
}
