//! Wallet service.
//!
//! Balance and transaction history of the signed in creator. Every change that moves money
//! records a transaction under the same lock as the balance update, so history and balance never
//! disagree.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::prelude::{TransactionType, Wallet, WalletTransaction};

use crate::{
    model::wallet::{check_payout, DEFAULT_DEPOSIT_METHOD},
    server::{
        data::{campaign::CampaignRepository, wallet::WalletRepository},
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::latency::Latency,
    },
};

const SYSTEM_CAMPAIGN: &str = "System";
const PAYOUT_DESCRIPTION: &str = "Payout to PayPal";

pub struct WalletService<'a> {
    state: &'a AppState,
}

impl<'a> WalletService<'a> {
    /// Creates a new instance of [`WalletService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn get_wallet(&self) -> Result<Wallet, Error> {
        Latency::Query.simulate(&self.state.config).await;

        Ok(WalletRepository::new(&self.state.db).get_wallet().await)
    }

    /// Transaction history, newest first.
    pub async fn get_transactions(&self) -> Result<Vec<WalletTransaction>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(WalletRepository::new(&self.state.db)
            .get_transactions()
            .await)
    }

    /// Pays `amount` out of the available balance.
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The completed payout transaction
    /// - `Err(Error::ValidationError)` - Below the $50 minimum or above the available balance,
    ///   nothing is changed
    pub async fn request_payout(&self, amount: f64) -> Result<WalletTransaction, Error> {
        Latency::Write.simulate(&self.state.config).await;

        let mut ledger = WalletRepository::new(&self.state.db).ledger().await;
        check_payout(amount, ledger.wallet.available_balance).map_err(ValidationError::from)?;

        ledger.wallet.available_balance -= amount;
        ledger.wallet.total_paid_out += amount;

        Ok(ledger.record(
            TransactionType::Payout,
            amount,
            PAYOUT_DESCRIPTION.to_string(),
            SYSTEM_CAMPAIGN.to_string(),
            Utc::now(),
        ))
    }

    /// Credits campaign earnings to the available balance.
    ///
    /// The transaction is labelled with the campaign's product name, or `Campaign {id}` when
    /// the campaign is no longer listed.
    pub async fn add_earning(
        &self,
        campaign_id: i32,
        amount: f64,
        description: String,
    ) -> Result<WalletTransaction, Error> {
        Latency::Query.simulate(&self.state.config).await;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidEarningAmount.into());
        }

        let campaign_name = CampaignRepository::new(&self.state.db)
            .get_by_id(campaign_id)
            .await
            .map(|campaign| campaign.product_name)
            .unwrap_or_else(|| format!("Campaign {}", campaign_id));

        let mut ledger = WalletRepository::new(&self.state.db).ledger().await;
        ledger.wallet.available_balance += amount;
        ledger.wallet.total_earned += amount;

        Ok(ledger.record(
            TransactionType::Earning,
            amount,
            description,
            campaign_name,
            Utc::now(),
        ))
    }

    /// Adds funds to the available balance, by PayPal unless another method is given.
    pub async fn add_deposit(
        &self,
        amount: f64,
        method: Option<String>,
    ) -> Result<WalletTransaction, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidDepositAmount.into());
        }

        let method = method
            .filter(|method| !method.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEPOSIT_METHOD.to_string());

        let mut ledger = WalletRepository::new(&self.state.db).ledger().await;
        ledger.wallet.available_balance += amount;

        Ok(ledger.record(
            TransactionType::Deposit,
            amount,
            format!("Deposit via {}", method),
            SYSTEM_CAMPAIGN.to_string(),
            Utc::now(),
        ))
    }
}
