use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub available_balance: f64,
    pub pending_balance: f64,
    pub total_earned: f64,
    pub total_paid_out: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Earning,
    Payout,
    Deposit,
    Bonus,
    Refund,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Earning => "earning",
            TransactionType::Payout => "payout",
            TransactionType::Deposit => "deposit",
            TransactionType::Bonus => "bonus",
            TransactionType::Refund => "refund",
        }
    }

    /// Whether the transaction takes money out of the wallet.
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionType::Payout)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub campaign_name: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}
