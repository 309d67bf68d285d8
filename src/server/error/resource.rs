use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A record addressed by id does not exist in its table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Campaign not found")]
    CampaignNotFound(i32),
    #[error("Product not found")]
    ProductNotFound(i32),
    #[error("Affiliate not found")]
    AffiliateNotFound(i32),
    #[error("Referral not found")]
    ReferralNotFound(i32),
    #[error("Commission not found")]
    CommissionNotFound(i32),
    #[error("Conversation not found")]
    ConversationNotFound(i32),
}

impl ResourceError {
    fn id(&self) -> i32 {
        match self {
            Self::CampaignNotFound(id)
            | Self::ProductNotFound(id)
            | Self::AffiliateNotFound(id)
            | Self::ReferralNotFound(id)
            | Self::CommissionNotFound(id)
            | Self::ConversationNotFound(id) => *id,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!(id = %self.id(), "{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
