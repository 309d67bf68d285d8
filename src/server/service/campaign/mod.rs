//! Campaign service.
//!
//! Campaigns are collaboration offers from stores to influencers. The list endpoint is paginated
//! and cached for three minutes; every write clears the list cache so the next read reflects it.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::prelude::{Campaign, CampaignStatus};

use crate::{
    model::{
        campaign::{CampaignPatchDto, NewCampaignDto},
        page::{Page, PageQuery, DEFAULT_LIMIT},
    },
    server::{
        data::campaign::CampaignRepository,
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::{cache::cache_key, latency::Latency},
    },
};

/// Service for browsing and managing campaigns.
pub struct CampaignService<'a> {
    state: &'a AppState,
}

impl<'a> CampaignService<'a> {
    /// Creates a new instance of [`CampaignService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Retrieves one page of campaigns in storage order.
    ///
    /// Pages are cached under `getAll_{page}_{limit}`; `use_cache=false` skips the lookup but
    /// still refreshes the cached page.
    pub async fn get_all(&self, query: PageQuery) -> Result<Page<Campaign>, Error> {
        Latency::List.simulate(&self.state.config).await;

        let page = query.page();
        let limit = query.limit_or(DEFAULT_LIMIT);
        let key = cache_key("getAll", &[&page, &limit]);

        let generation = {
            let campaigns = self.state.cache.campaigns.lock().await;
            if query.use_cache() {
                if let Some(cached) = campaigns.get(&key, Utc::now()) {
                    return Ok(cached);
                }
            }
            campaigns.generation()
        };

        let campaigns = CampaignRepository::new(&self.state.db).get_all().await;
        let result = Page::slice(&campaigns, page, limit);

        self.state
            .cache
            .campaigns
            .lock()
            .await
            .insert_if_current(key, result.clone(), Utc::now(), generation);

        Ok(result)
    }

    /// Retrieves a campaign by id.
    ///
    /// # Returns
    /// - `Ok(Campaign)` - Copy of the stored campaign
    /// - `Err(Error::ResourceError)` - No campaign with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Campaign, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        CampaignRepository::new(&self.state.db)
            .get_by_id(id)
            .await
            .ok_or_else(|| ResourceError::CampaignNotFound(id).into())
    }

    pub async fn create(&self, campaign: NewCampaignDto) -> Result<Campaign, Error> {
        Latency::Write.simulate(&self.state.config).await;

        let campaign = CampaignRepository::new(&self.state.db)
            .create(campaign, Utc::now())
            .await;
        self.invalidate().await;

        Ok(campaign)
    }

    /// Merges the fields present in `patch` into the campaign.
    pub async fn update(&self, id: i32, patch: CampaignPatchDto) -> Result<Campaign, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let campaign = CampaignRepository::new(&self.state.db)
            .update(id, patch)
            .await
            .ok_or(ResourceError::CampaignNotFound(id))?;
        self.invalidate().await;

        Ok(campaign)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        if !CampaignRepository::new(&self.state.db).delete(id).await {
            return Err(ResourceError::CampaignNotFound(id).into());
        }
        self.invalidate().await;

        Ok(())
    }

    /// Accepts a campaign offer on behalf of the influencer.
    pub async fn accept(&self, id: i32) -> Result<Campaign, Error> {
        self.update(id, CampaignPatchDto::status(CampaignStatus::Accepted))
            .await
    }

    /// Declines a campaign offer on behalf of the influencer.
    pub async fn decline(&self, id: i32) -> Result<Campaign, Error> {
        self.update(id, CampaignPatchDto::status(CampaignStatus::Declined))
            .await
    }

    async fn invalidate(&self) {
        self.state.cache.campaigns.lock().await.clear();
    }
}
