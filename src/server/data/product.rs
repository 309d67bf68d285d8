use chrono::{DateTime, Utc};
use entity::prelude::Product;

use crate::{
    model::product::{NewProductDto, ProductPatchDto},
    server::data::MemoryDb,
};

pub struct ProductRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Product> {
        self.db.products.all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Product> {
        self.db.products.find(id).await
    }

    /// Creates a product with zeroed campaign, view and sales counters
    pub async fn create(&self, product: NewProductDto, now: DateTime<Utc>) -> Product {
        self.db
            .products
            .insert_with(|id| Product {
                id,
                name: product.name,
                price: product.price,
                niche: product.niche,
                description: product.description,
                images: product.images,
                commission_type: product.commission_type,
                commission_value: product.commission_value,
                smart_match: product.smart_match,
                target_audience: product.target_audience,
                content_style: product.content_style,
                engagement_tier: product.engagement_tier,
                quality_score: product.quality_score,
                boost_active: false,
                boost_multiplier: 1.0,
                boost_activated_at: None,
                created_at: now,
                active_campaigns: 0,
                total_views: 0,
                total_sales: 0,
            })
            .await
    }

    pub async fn update(&self, id: i32, patch: ProductPatchDto) -> Option<Product> {
        self.db
            .products
            .update(id, |product| patch.apply(product))
            .await
    }

    pub async fn activate_boost(
        &self,
        id: i32,
        multiplier: f64,
        now: DateTime<Utc>,
    ) -> Option<Product> {
        self.db
            .products
            .update(id, |product| {
                product.boost_active = true;
                product.boost_multiplier = multiplier;
                product.boost_activated_at = Some(now);
            })
            .await
    }

    /// Deletes a product, returning whether it existed
    pub async fn delete(&self, id: i32) -> bool {
        self.db.products.remove(id).await
    }
}
