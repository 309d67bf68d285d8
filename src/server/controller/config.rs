use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::ClientConfigDto, server::model::app::AppState};

pub static CONFIG_TAG: &str = "config";

/// Public configuration for the web client
#[utoipa::path(
    get,
    path = "/api/config",
    tag = CONFIG_TAG,
    responses(
        (status = 200, description = "Client configuration", body = ClientConfigDto)
    ),
)]
pub async fn get_client_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ClientConfigDto {
            paypal_client_id: state.config.paypal_client_id.clone(),
        }),
    )
}
