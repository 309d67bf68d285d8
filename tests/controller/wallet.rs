use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::prelude::{TransactionType, Wallet, WalletTransaction};
use influencehub::{
    model::{
        api::ErrorDto,
        wallet::{DepositRequestDto, PayoutRequestDto},
    },
    server::controller::wallet::{add_deposit, get_transactions, get_wallet, request_payout},
};

use super::*;

/// Expected: 400 Bad Request and an untouched balance when below the $50 minimum
#[tokio::test]
async fn payout_below_minimum_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wallet(factory::wallet(500.0)).build()?;
    let state = app_state(&test);

    let result =
        request_payout(State(state.clone()), Json(PayoutRequestDto { amount: 49.99 })).await;

    let resp = result.err().expect("payout below minimum should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Minimum payout amount is $50");

    let wallet: Wallet = json_body(get_wallet(State(state)).await.unwrap().into_response()).await;
    assert_eq!(wallet.available_balance, 500.0);

    Ok(())
}

/// Expected: 400 Bad Request when the payout exceeds the available balance
#[tokio::test]
async fn payout_above_balance_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wallet(factory::wallet(80.0)).build()?;

    let result =
        request_payout(State(app_state(&test)), Json(PayoutRequestDto { amount: 100.0 })).await;

    let resp = result.err().expect("payout above balance should fail").into_response();
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Insufficient balance");

    Ok(())
}

/// Expected: 201 Created, the balance moves to paid out and the payout leads the history
#[tokio::test]
async fn payout_moves_balance_and_records_transaction() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wallet(factory::wallet(300.0))
        .with_transaction(factory::transaction(1, TransactionType::Earning, 300.0))
        .build()?;
    let state = app_state(&test);

    let resp = request_payout(State(state.clone()), Json(PayoutRequestDto { amount: 120.0 }))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let wallet: Wallet =
        json_body(get_wallet(State(state.clone())).await.unwrap().into_response()).await;
    assert_eq!(wallet.available_balance, 180.0);
    assert_eq!(wallet.total_paid_out, 120.0);

    let history: Vec<WalletTransaction> =
        json_body(get_transactions(State(state)).await.unwrap().into_response()).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, TransactionType::Payout);
    assert_eq!(history[0].campaign_name, "System");

    Ok(())
}

/// Expected: deposits default to PayPal and credit the available balance
#[tokio::test]
async fn deposit_credits_balance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wallet(factory::wallet(10.0)).build()?;
    let state = app_state(&test);

    let resp = add_deposit(
        State(state.clone()),
        Json(DepositRequestDto {
            amount: 25.0,
            method: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let transaction: WalletTransaction = json_body(resp).await;
    assert_eq!(transaction.kind, TransactionType::Deposit);
    assert!(transaction.description.contains("PayPal"));

    let wallet: Wallet = json_body(get_wallet(State(state)).await.unwrap().into_response()).await;
    assert_eq!(wallet.available_balance, 35.0);

    Ok(())
}
