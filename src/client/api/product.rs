use entity::prelude::Product;

use super::Method;
use crate::model::{
    page::Page,
    product::{
        BoostActivationDto, BoostCostDto, BoostRequestDto, InfluencerMatch, MatchCriteria,
        NewProductDto, ProductPatchDto,
    },
};

pub async fn get_products(page: usize, limit: usize) -> Result<Page<Product>, String> {
    super::get(&format!("/api/products?page={}&limit={}", page, limit)).await
}

pub async fn create_product(product: &NewProductDto) -> Result<Product, String> {
    super::send(Method::Post, "/api/products", product).await
}

pub async fn update_product(id: i32, patch: &ProductPatchDto) -> Result<Product, String> {
    super::send(Method::Patch, &format!("/api/products/{}", id), patch).await
}

pub async fn delete_product(id: i32) -> Result<(), String> {
    super::call_empty::<()>(Method::Delete, &format!("/api/products/{}", id), None).await
}

pub async fn get_boost_cost(id: i32, multiplier: f64) -> Result<BoostCostDto, String> {
    super::get(&format!(
        "/api/products/{}/boost?multiplier={}",
        id, multiplier
    ))
    .await
}

pub async fn activate_boost(id: i32, multiplier: f64) -> Result<BoostActivationDto, String> {
    super::send(
        Method::Post,
        &format!("/api/products/{}/boost", id),
        &BoostRequestDto { multiplier },
    )
    .await
}

pub async fn get_recommendations(criteria: &MatchCriteria) -> Result<Vec<InfluencerMatch>, String> {
    super::send(Method::Post, "/api/products/recommendations", criteria).await
}
