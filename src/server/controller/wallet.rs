use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::prelude::{Wallet, WalletTransaction};

use crate::{
    model::{
        api::ErrorDto,
        wallet::{DepositRequestDto, EarningRequestDto, PayoutRequestDto},
    },
    server::{error::Error, model::app::AppState, service::wallet::WalletService},
};

pub static WALLET_TAG: &str = "wallet";

/// Get the wallet balances
#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Wallet balances", body = Wallet)
    ),
)]
pub async fn get_wallet(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let wallet = WalletService::new(&state).get_wallet().await?;

    Ok((StatusCode::OK, Json(wallet)))
}

/// List wallet transactions, newest first
#[utoipa::path(
    get,
    path = "/api/wallet/transactions",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Transaction history", body = Vec<WalletTransaction>)
    ),
)]
pub async fn get_transactions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let transactions = WalletService::new(&state).get_transactions().await?;

    Ok((StatusCode::OK, Json(transactions)))
}

/// Pay out part of the available balance
#[utoipa::path(
    post,
    path = "/api/wallet/payouts",
    tag = WALLET_TAG,
    request_body = PayoutRequestDto,
    responses(
        (status = 201, description = "Completed payout", body = WalletTransaction),
        (status = 400, description = "Below the $50 minimum or above the balance", body = ErrorDto)
    ),
)]
pub async fn request_payout(
    State(state): State<AppState>,
    Json(request): Json<PayoutRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = WalletService::new(&state)
        .request_payout(request.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Add funds to the wallet
#[utoipa::path(
    post,
    path = "/api/wallet/deposits",
    tag = WALLET_TAG,
    request_body = DepositRequestDto,
    responses(
        (status = 201, description = "Completed deposit", body = WalletTransaction),
        (status = 400, description = "Invalid deposit amount", body = ErrorDto)
    ),
)]
pub async fn add_deposit(
    State(state): State<AppState>,
    Json(request): Json<DepositRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = WalletService::new(&state)
        .add_deposit(request.amount, request.method)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Credit campaign earnings to the wallet
#[utoipa::path(
    post,
    path = "/api/wallet/earnings",
    tag = WALLET_TAG,
    request_body = EarningRequestDto,
    responses(
        (status = 201, description = "Recorded earning", body = WalletTransaction),
        (status = 400, description = "Invalid earning amount", body = ErrorDto)
    ),
)]
pub async fn add_earning(
    State(state): State<AppState>,
    Json(request): Json<EarningRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = WalletService::new(&state)
        .add_earning(request.campaign_id, request.amount, request.description)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
