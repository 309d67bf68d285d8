use chrono::{DateTime, Utc};
use entity::prelude::{Campaign, CampaignStatus};

use crate::{
    model::campaign::{CampaignPatchDto, NewCampaignDto},
    server::data::MemoryDb,
};

pub struct CampaignRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> CampaignRepository<'a> {
    /// Creates a new instance of [`CampaignRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Campaign> {
        self.db.campaigns.all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Campaign> {
        self.db.campaigns.find(id).await
    }

    /// Creates a pending campaign with no views or applications yet
    pub async fn create(&self, campaign: NewCampaignDto, now: DateTime<Utc>) -> Campaign {
        self.db
            .campaigns
            .insert_with(|id| Campaign {
                id,
                product_name: campaign.product_name,
                store_name: campaign.store_name,
                niche: campaign.niche,
                commission_type: campaign.commission_type,
                commission_value: campaign.commission_value,
                status: CampaignStatus::Pending,
                deadline: campaign.deadline,
                description: campaign.description,
                product_image: campaign.product_image,
                views: 0,
                applications: 0,
                created_at: now,
            })
            .await
    }

    pub async fn update(&self, id: i32, patch: CampaignPatchDto) -> Option<Campaign> {
        self.db
            .campaigns
            .update(id, |campaign| patch.apply(campaign))
            .await
    }

    /// Deletes a campaign, returning whether it existed
    pub async fn delete(&self, id: i32) -> bool {
        self.db.campaigns.remove(id).await
    }
}
