use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    product::REQUIRED_FIELDS_MESSAGE,
    wallet::{
        PayoutRejection, INSUFFICIENT_BALANCE_MESSAGE, INVALID_DEPOSIT_MESSAGE,
        MINIMUM_PAYOUT_MESSAGE,
    },
};

/// A request was understood but breaks a marketplace rule.
///
/// The display message of every variant is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MINIMUM_PAYOUT_MESSAGE)]
    MinimumPayout,
    #[error("{}", INSUFFICIENT_BALANCE_MESSAGE)]
    InsufficientBalance,
    #[error("Payout amount exceeds pending commissions")]
    PayoutExceedsPendingCommissions,
    #[error("Referral already converted")]
    ReferralAlreadyConverted(i32),
    #[error("{}", INVALID_DEPOSIT_MESSAGE)]
    InvalidDepositAmount,
    #[error("Invalid earning amount")]
    InvalidEarningAmount,
    #[error("Boost multiplier must be a positive number")]
    InvalidBoostMultiplier,
    #[error("Cannot exceed slot limit for current tier")]
    SlotLimitExceeded,
    #[error("Invalid subscription tier")]
    InvalidSubscriptionTier(String),
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingRequiredFields,
    #[error("Image URL cannot be empty")]
    EmptyImageUrl,
    #[error("Unsupported social platform: {0}")]
    UnsupportedPlatform(String),
}

impl From<PayoutRejection> for ValidationError {
    fn from(rejection: PayoutRejection) -> Self {
        match rejection {
            PayoutRejection::BelowMinimum => Self::MinimumPayout,
            PayoutRejection::InsufficientBalance => Self::InsufficientBalance,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
