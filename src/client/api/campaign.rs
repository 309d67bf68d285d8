use entity::prelude::Campaign;

use super::Method;
use crate::model::page::Page;

pub async fn get_campaigns(page: usize, limit: usize) -> Result<Page<Campaign>, String> {
    super::get(&format!("/api/campaigns?page={}&limit={}", page, limit)).await
}

pub async fn accept_campaign(id: i32) -> Result<Campaign, String> {
    super::call(Method::Post, &format!("/api/campaigns/{}/accept", id)).await
}

pub async fn decline_campaign(id: i32) -> Result<Campaign, String> {
    super::call(Method::Post, &format!("/api/campaigns/{}/decline", id)).await
}
