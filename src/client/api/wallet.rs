use entity::prelude::{Wallet, WalletTransaction};

use super::Method;
use crate::model::wallet::{DepositRequestDto, PayoutRequestDto};

pub async fn get_wallet() -> Result<Wallet, String> {
    super::get("/api/wallet").await
}

pub async fn get_transactions() -> Result<Vec<WalletTransaction>, String> {
    super::get("/api/wallet/transactions").await
}

pub async fn request_payout(amount: f64) -> Result<WalletTransaction, String> {
    super::send(Method::Post, "/api/wallet/payouts", &PayoutRequestDto { amount }).await
}

pub async fn add_deposit(amount: f64, method: Option<String>) -> Result<WalletTransaction, String> {
    super::send(
        Method::Post,
        "/api/wallet/deposits",
        &DepositRequestDto { amount, method },
    )
    .await
}
