//! Product service.
//!
//! Store products with their SmartMatch targeting fields. Besides the usual CRUD operations the
//! service prices and activates visibility boosts and serves SmartMatch influencer
//! recommendations, which are cached per criteria for thirty minutes.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::prelude::Product;

use crate::{
    model::{
        page::{Page, PageQuery, DEFAULT_LIMIT},
        product::{
            BoostActivationDto, BoostCostDto, InfluencerMatch, MatchCriteria, NewProductDto,
            ProductPatchDto,
        },
    },
    server::{
        data::product::ProductRepository,
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::app::AppState,
        service::{cache::cache_key, latency::Latency, smart_match},
    },
};

/// Boost cost per day at a multiplier of 1, in dollars.
pub const BOOST_BASE_DAILY_COST: f64 = 10.0;

/// Visibility increase in percent per unit of boost multiplier.
pub const BOOST_VISIBILITY_PER_MULTIPLIER: f64 = 50.0;

/// Service for managing store products and their SmartMatch promotion.
pub struct ProductService<'a> {
    state: &'a AppState,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Retrieves one page of products, cached under `getAll_{page}_{limit}`.
    pub async fn get_all(&self, query: PageQuery) -> Result<Page<Product>, Error> {
        Latency::List.simulate(&self.state.config).await;

        let page = query.page();
        let limit = query.limit_or(DEFAULT_LIMIT);
        let key = cache_key("getAll", &[&page, &limit]);

        let generation = {
            let products = self.state.cache.products.lock().await;
            if query.use_cache() {
                if let Some(cached) = products.get(&key, Utc::now()) {
                    return Ok(cached);
                }
            }
            products.generation()
        };

        let products = ProductRepository::new(&self.state.db).get_all().await;
        let result = Page::slice(&products, page, limit);

        self.state
            .cache
            .products
            .lock()
            .await
            .insert_if_current(key, result.clone(), Utc::now(), generation);

        Ok(result)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        self.find(id).await
    }

    /// Creates a product after checking name, price and description are filled in.
    ///
    /// # Returns
    /// - `Ok(Product)` - The stored product with zeroed counters
    /// - `Err(Error::ValidationError)` - A required field is blank or the price is not positive
    pub async fn create(&self, product: NewProductDto) -> Result<Product, Error> {
        Latency::Write.simulate(&self.state.config).await;

        if !product.has_required_fields() {
            return Err(ValidationError::MissingRequiredFields.into());
        }

        let product = ProductRepository::new(&self.state.db)
            .create(product, Utc::now())
            .await;
        self.invalidate().await;

        Ok(product)
    }

    pub async fn update(&self, id: i32, patch: ProductPatchDto) -> Result<Product, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let product = ProductRepository::new(&self.state.db)
            .update(id, patch)
            .await
            .ok_or(ResourceError::ProductNotFound(id))?;
        self.invalidate().await;

        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        if !ProductRepository::new(&self.state.db).delete(id).await {
            return Err(ResourceError::ProductNotFound(id).into());
        }
        self.invalidate().await;

        Ok(())
    }

    /// Prices a boost of the product at `multiplier` without activating it.
    pub async fn calculate_boost(&self, id: i32, multiplier: f64) -> Result<BoostCostDto, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        check_multiplier(multiplier)?;
        self.find(id).await?;

        Ok(BoostCostDto {
            multiplier,
            daily_cost: daily_boost_cost(multiplier),
        })
    }

    /// Activates a visibility boost on the product.
    ///
    /// # Returns
    /// - `Ok(BoostActivationDto)` - Daily cost and visibility increase of the boost
    /// - `Err(Error::ValidationError)` - Multiplier is not a positive number
    /// - `Err(Error::ResourceError)` - No product with that id
    pub async fn activate_boost(
        &self,
        id: i32,
        multiplier: f64,
    ) -> Result<BoostActivationDto, Error> {
        Latency::Query.simulate(&self.state.config).await;

        check_multiplier(multiplier)?;
        ProductRepository::new(&self.state.db)
            .activate_boost(id, multiplier, Utc::now())
            .await
            .ok_or(ResourceError::ProductNotFound(id))?;
        self.invalidate().await;

        Ok(BoostActivationDto {
            success: true,
            cost: daily_boost_cost(multiplier),
            visibility_increase: multiplier * BOOST_VISIBILITY_PER_MULTIPLIER,
        })
    }

    /// Recommends influencers from the SmartMatch pool for the criteria, best match first.
    pub async fn get_recommendations(
        &self,
        criteria: MatchCriteria,
    ) -> Result<Vec<InfluencerMatch>, Error> {
        let key = serde_json::to_string(&criteria).map_err(|e| {
            Error::InternalError(format!("Failed to serialize SmartMatch criteria: {}", e))
        })?;

        if let Some(cached) = self
            .state
            .cache
            .recommendations
            .lock()
            .await
            .get(&key, Utc::now())
        {
            return Ok(cached);
        }

        Latency::Compute.simulate(&self.state.config).await;

        if let Some(multiplier) = criteria.boost_active.then_some(criteria.boost_multiplier) {
            check_multiplier(multiplier)?;
        }

        let matches = smart_match::recommend(
            &self.state.influencers,
            &criteria,
            &self.state.config.match_weights,
        );

        self.state
            .cache
            .recommendations
            .lock()
            .await
            .insert(key, matches.clone(), Utc::now());

        Ok(matches)
    }

    async fn find(&self, id: i32) -> Result<Product, Error> {
        ProductRepository::new(&self.state.db)
            .get_by_id(id)
            .await
            .ok_or_else(|| ResourceError::ProductNotFound(id).into())
    }

    async fn invalidate(&self) {
        self.state.cache.products.lock().await.clear();
    }
}

/// Daily cost of a boost at `multiplier`.
pub fn daily_boost_cost(multiplier: f64) -> f64 {
    BOOST_BASE_DAILY_COST * multiplier
}

fn check_multiplier(multiplier: f64) -> Result<(), ValidationError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidBoostMultiplier)
    }
}
