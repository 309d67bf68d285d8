use serde::{Deserialize, Serialize};

/// Smallest amount that can be paid out, in dollars.
pub const MINIMUM_PAYOUT: f64 = 50.0;

pub const MINIMUM_PAYOUT_MESSAGE: &str = "Minimum payout amount is $50";
pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "Insufficient balance";
pub const INVALID_DEPOSIT_MESSAGE: &str = "Invalid deposit amount";

pub const DEFAULT_DEPOSIT_METHOD: &str = "PayPal";

/// Reason a payout request is refused before any money moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutRejection {
    BelowMinimum,
    InsufficientBalance,
}

impl PayoutRejection {
    pub fn message(&self) -> &'static str {
        match self {
            PayoutRejection::BelowMinimum => MINIMUM_PAYOUT_MESSAGE,
            PayoutRejection::InsufficientBalance => INSUFFICIENT_BALANCE_MESSAGE,
        }
    }
}

/// Check a payout of `amount` against the minimum and the available balance.
///
/// The web client runs this before sending a request and the wallet service runs it again
/// before mutating any balance.
pub fn check_payout(amount: f64, available_balance: f64) -> Result<(), PayoutRejection> {
    if !amount.is_finite() || amount < MINIMUM_PAYOUT {
        return Err(PayoutRejection::BelowMinimum);
    }
    if amount > available_balance {
        return Err(PayoutRejection::InsufficientBalance);
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PayoutRequestDto {
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DepositRequestDto {
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EarningRequestDto {
    pub campaign_id: i32,
    pub amount: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_payout_below_minimum_even_with_low_balance() {
        assert_eq!(check_payout(49.99, 30.0), Err(PayoutRejection::BelowMinimum));
        assert_eq!(
            PayoutRejection::BelowMinimum.message(),
            "Minimum payout amount is $50"
        );
    }

    #[test]
    fn rejects_payout_above_balance() {
        assert_eq!(
            check_payout(120.0, 100.0),
            Err(PayoutRejection::InsufficientBalance)
        );
    }

    #[test]
    fn accepts_payout_within_balance() {
        assert_eq!(check_payout(50.0, 50.0), Ok(()));
        assert_eq!(check_payout(f64::NAN, 100.0), Err(PayoutRejection::BelowMinimum));
    }
}
