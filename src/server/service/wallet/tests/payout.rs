use super::*;

/// Expect a payout to debit the balance and lead the history
#[tokio::test]
async fn pays_out_available_balance() -> Result<(), TestError> {
    let test = funded_wallet(120.0).build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    let transaction = wallet_service.request_payout(75.0).await.unwrap();

    assert_eq!(transaction.kind, TransactionType::Payout);
    assert_eq!(transaction.amount, 75.0);

    let wallet = wallet_service.get_wallet().await.unwrap();
    assert_eq!(wallet.available_balance, 45.0);
    assert_eq!(wallet.total_paid_out, 75.0);

    let history = wallet_service.get_transactions().await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].id, transaction.id);

    Ok(())
}

/// Expect a payout below $50 to be rejected without touching the wallet
#[tokio::test]
async fn rejects_payout_below_minimum() -> Result<(), TestError> {
    let test = funded_wallet(30.0).build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    let result = wallet_service.request_payout(30.0).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MinimumPayout))
    ));
    assert_eq!(wallet_service.get_wallet().await.unwrap().available_balance, 30.0);
    assert_eq!(wallet_service.get_transactions().await.unwrap().len(), 2);

    Ok(())
}

/// Expect a payout above the available balance to be rejected
#[tokio::test]
async fn rejects_payout_above_balance() -> Result<(), TestError> {
    let test = funded_wallet(60.0).build()?;
    let state: AppState = test.state();
    let wallet_service = WalletService::new(&state);

    let result = wallet_service.request_payout(61.0).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InsufficientBalance))
    ));
    assert_eq!(wallet_service.get_wallet().await.unwrap().total_paid_out, 0.0);

    Ok(())
}
