use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Product;

use crate::{
    model::{
        api::ErrorDto,
        page::{Page, PageQuery},
        product::{
            BoostActivationDto, BoostCostDto, BoostRequestDto, InfluencerMatch, MatchCriteria,
            NewProductDto, ProductPatchDto,
        },
    },
    server::{error::Error, model::app::AppState, service::product::ProductService},
};

pub static PRODUCT_TAG: &str = "product";

/// List one page of products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = Page<Product>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = ProductService::new(&state).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product = ProductService::new(&state).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Add a product to the catalogue
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = NewProductDto,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 400, description = "Required fields missing", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<NewProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product = ProductService::new(&state).create(product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update the given fields of a product
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductPatchDto,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProductPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let product = ProductService::new(&state).update(id, patch).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Remove a product from the catalogue
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ProductService::new(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Quote the daily cost of boosting a product
#[utoipa::path(
    get,
    path = "/api/products/{id}/boost",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id"), BoostRequestDto),
    responses(
        (status = 200, description = "Daily boost cost", body = BoostCostDto),
        (status = 400, description = "Invalid multiplier", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_boost_cost(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(request): Query<BoostRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let cost = ProductService::new(&state)
        .calculate_boost(id, request.multiplier)
        .await?;

    Ok((StatusCode::OK, Json(cost)))
}

/// Boost a product's visibility
#[utoipa::path(
    post,
    path = "/api/products/{id}/boost",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = BoostRequestDto,
    responses(
        (status = 200, description = "Boost activated", body = BoostActivationDto),
        (status = 400, description = "Invalid multiplier", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn activate_boost(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BoostRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let activation = ProductService::new(&state)
        .activate_boost(id, request.multiplier)
        .await?;

    Ok((StatusCode::OK, Json(activation)))
}

/// Recommend influencers for the given match criteria
#[utoipa::path(
    post,
    path = "/api/products/recommendations",
    tag = PRODUCT_TAG,
    request_body = MatchCriteria,
    responses(
        (status = 200, description = "Best matches first", body = Vec<InfluencerMatch>),
        (status = 400, description = "Invalid boost multiplier", body = ErrorDto)
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(criteria): Json<MatchCriteria>,
) -> Result<impl IntoResponse, Error> {
    let matches = ProductService::new(&state)
        .get_recommendations(criteria)
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}
