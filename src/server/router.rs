//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Every handler is registered through `routes!` so its utoipa annotation lands in the OpenAPI
/// document served at `/api/docs/openapi.json`. Handlers sharing a path with different methods
/// are registered together.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given the application state and merged into the
/// Dioxus server router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "InfluenceHub", description = "InfluenceHub marketplace API"), tags(
        (name = controller::campaign::CAMPAIGN_TAG, description = "Campaign offers"),
        (name = controller::product::PRODUCT_TAG, description = "Products, boosts and SmartMatch"),
        (name = controller::affiliate::AFFILIATE_TAG, description = "Affiliate program"),
        (name = controller::message::MESSAGE_TAG, description = "Messaging center"),
        (name = controller::wallet::WALLET_TAG, description = "Wallet and payouts"),
        (name = controller::settings::SETTINGS_TAG, description = "Account settings"),
        (name = controller::analytics::ANALYTICS_TAG, description = "Analytics reports"),
        (name = controller::config::CONFIG_TAG, description = "Client configuration"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::campaign::get_campaigns,
            controller::campaign::create_campaign
        ))
        .routes(routes!(
            controller::campaign::get_campaign,
            controller::campaign::update_campaign,
            controller::campaign::delete_campaign
        ))
        .routes(routes!(controller::campaign::accept_campaign))
        .routes(routes!(controller::campaign::decline_campaign))
        .routes(routes!(
            controller::product::get_products,
            controller::product::create_product
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(
            controller::product::get_boost_cost,
            controller::product::activate_boost
        ))
        .routes(routes!(controller::product::get_recommendations))
        .routes(routes!(
            controller::affiliate::get_affiliates,
            controller::affiliate::create_affiliate
        ))
        .routes(routes!(controller::affiliate::get_top_performers))
        .routes(routes!(controller::affiliate::validate_referral_code))
        .routes(routes!(
            controller::affiliate::get_affiliate,
            controller::affiliate::update_affiliate,
            controller::affiliate::delete_affiliate
        ))
        .routes(routes!(controller::affiliate::get_affiliate_stats))
        .routes(routes!(controller::affiliate::get_referral_link))
        .routes(routes!(controller::affiliate::get_affiliate_referrals))
        .routes(routes!(controller::affiliate::get_affiliate_commissions))
        .routes(routes!(
            controller::affiliate::get_affiliate_payouts,
            controller::affiliate::create_payout
        ))
        .routes(routes!(
            controller::affiliate::get_referrals,
            controller::affiliate::create_referral
        ))
        .routes(routes!(controller::affiliate::convert_referral))
        .routes(routes!(controller::affiliate::get_commissions))
        .routes(routes!(controller::affiliate::get_commission))
        .routes(routes!(controller::affiliate::get_payouts))
        .routes(routes!(controller::message::get_conversations))
        .routes(routes!(
            controller::message::get_messages,
            controller::message::send_message
        ))
        .routes(routes!(controller::message::mark_as_read))
        .routes(routes!(controller::wallet::get_wallet))
        .routes(routes!(controller::wallet::get_transactions))
        .routes(routes!(controller::wallet::request_payout))
        .routes(routes!(controller::wallet::add_deposit))
        .routes(routes!(controller::wallet::add_earning))
        .routes(routes!(
            controller::settings::get_settings,
            controller::settings::update_settings
        ))
        .routes(routes!(controller::settings::update_password))
        .routes(routes!(controller::settings::upload_profile_image))
        .routes(routes!(controller::settings::update_subscription_tier))
        .routes(routes!(controller::settings::get_subscription_tiers))
        .routes(routes!(
            controller::settings::get_slot_usage,
            controller::settings::update_slot_usage
        ))
        .routes(routes!(
            controller::settings::connect_social_account,
            controller::settings::disconnect_social_account
        ))
        .routes(routes!(controller::analytics::get_analytics))
        .routes(routes!(controller::config::get_client_config))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
