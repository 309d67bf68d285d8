use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use entity::prelude::{Campaign, CampaignStatus, CommissionType, Niche};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/campaigns`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewCampaignDto {
    pub product_name: String,
    pub store_name: String,
    pub niche: Niche,
    pub commission_type: CommissionType,
    pub commission_value: f64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub product_image: Option<String>,
}

/// Body of `PATCH /api/campaigns/{id}`, absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CampaignPatchDto {
    pub product_name: Option<String>,
    pub store_name: Option<String>,
    pub niche: Option<Niche>,
    pub commission_type: Option<CommissionType>,
    pub commission_value: Option<f64>,
    pub status: Option<CampaignStatus>,
    pub deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub product_image: Option<String>,
}

impl CampaignPatchDto {
    pub fn status(status: CampaignStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Merge every field present in the patch into `campaign`.
    pub fn apply(self, campaign: &mut Campaign) {
        if let Some(product_name) = self.product_name {
            campaign.product_name = product_name;
        }
        if let Some(store_name) = self.store_name {
            campaign.store_name = store_name;
        }
        if let Some(niche) = self.niche {
            campaign.niche = niche;
        }
        if let Some(commission_type) = self.commission_type {
            campaign.commission_type = commission_type;
        }
        if let Some(commission_value) = self.commission_value {
            campaign.commission_value = commission_value;
        }
        if let Some(status) = self.status {
            campaign.status = status;
        }
        if let Some(deadline) = self.deadline {
            campaign.deadline = Some(deadline);
        }
        if let Some(description) = self.description {
            campaign.description = description;
        }
        if let Some(product_image) = self.product_image {
            campaign.product_image = Some(product_image);
        }
    }
}

/// Orderings offered by the campaign browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignSort {
    #[default]
    Newest,
    HighestCommission,
    Deadline,
    MostPopular,
}

impl CampaignSort {
    pub const ALL: [CampaignSort; 4] = [
        CampaignSort::Newest,
        CampaignSort::HighestCommission,
        CampaignSort::Deadline,
        CampaignSort::MostPopular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignSort::Newest => "newest",
            CampaignSort::HighestCommission => "highest_commission",
            CampaignSort::Deadline => "deadline",
            CampaignSort::MostPopular => "most_popular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignSort::Newest => "Newest First",
            CampaignSort::HighestCommission => "Highest Commission",
            CampaignSort::Deadline => "Deadline Soon",
            CampaignSort::MostPopular => "Most Popular",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == value)
    }

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            CampaignSort::Newest => b.created_at.cmp(&a.created_at),
            CampaignSort::HighestCommission => b
                .commission_value
                .partial_cmp(&a.commission_value)
                .unwrap_or(Ordering::Equal),
            // Campaigns without a deadline go last
            CampaignSort::Deadline => match (a.deadline, b.deadline) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            CampaignSort::MostPopular => b.views.cmp(&a.views),
        }
    }
}

/// Search text, niche filter chips and sort order of the campaign browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignQuery {
    pub search: String,
    pub niches: Vec<Niche>,
    pub sort: CampaignSort,
}

impl CampaignQuery {
    /// Whether the campaign passes the search text and niche filters.
    ///
    /// The search is case-insensitive over product name, description and store name.
    pub fn matches(&self, campaign: &Campaign) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let haystack = format!(
                "{} {} {}",
                campaign.product_name, campaign.description, campaign.store_name
            )
            .to_lowercase();

            if !haystack.contains(&search) {
                return false;
            }
        }

        self.niches.is_empty() || self.niches.contains(&campaign.niche)
    }

    /// Filter and sort `campaigns`, returning the visible list.
    pub fn apply(&self, campaigns: &[Campaign]) -> Vec<Campaign> {
        let mut visible: Vec<Campaign> = campaigns
            .iter()
            .filter(|campaign| self.matches(campaign))
            .cloned()
            .collect();

        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }

    pub fn toggle_niche(&mut self, niche: Niche) {
        if let Some(index) = self.niches.iter().position(|n| *n == niche) {
            self.niches.remove(index);
        } else {
            self.niches.push(niche);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn campaign(id: i32, name: &str, niche: Niche, value: f64, day: u32, views: u64) -> Campaign {
        Campaign {
            id,
            product_name: name.to_string(),
            store_name: format!("Store {}", id),
            niche,
            commission_type: CommissionType::PerPost,
            commission_value: value,
            status: CampaignStatus::Pending,
            deadline: Some(Utc.with_ymd_and_hms(2026, 12, 28 - day, 0, 0, 0).unwrap()),
            description: format!("Promote {}", name),
            product_image: None,
            views,
            applications: 0,
            created_at: Utc.with_ymd_and_hms(2026, 9, day, 12, 0, 0).unwrap(),
        }
    }

    fn campaigns() -> Vec<Campaign> {
        vec![
            campaign(1, "Glow Serum", Niche::Beauty, 150.0, 1, 500),
            campaign(2, "Trail Shoe", Niche::Sports, 300.0, 3, 200),
            campaign(3, "Earbuds", Niche::Tech, 90.0, 2, 900),
        ]
    }

    fn ids(campaigns: &[Campaign]) -> Vec<i32> {
        campaigns.iter().map(|c| c.id).collect()
    }

    #[test]
    fn no_filters_sorts_newest_first() {
        let visible = CampaignQuery::default().apply(&campaigns());
        assert_eq!(ids(&visible), vec![2, 3, 1]);
    }

    #[test]
    fn highest_commission_sorts_by_value_descending() {
        let query = CampaignQuery {
            sort: CampaignSort::HighestCommission,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&campaigns())), vec![2, 1, 3]);
    }

    #[test]
    fn deadline_and_popularity_orderings() {
        let mut list = campaigns();
        list[0].deadline = None;

        let query = CampaignQuery {
            sort: CampaignSort::Deadline,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&list)), vec![2, 3, 1]);

        let query = CampaignQuery {
            sort: CampaignSort::MostPopular,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&list)), vec![3, 1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let query = CampaignQuery {
            search: "STORE 3".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&campaigns())), vec![3]);

        let query = CampaignQuery {
            search: "promote glow".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&campaigns())), vec![1]);
    }

    #[test]
    fn niche_chips_toggle() {
        let mut query = CampaignQuery::default();
        query.toggle_niche(Niche::Tech);
        query.toggle_niche(Niche::Beauty);
        assert_eq!(ids(&query.apply(&campaigns())), vec![3, 1]);

        query.toggle_niche(Niche::Tech);
        assert_eq!(ids(&query.apply(&campaigns())), vec![1]);
    }

    #[test]
    fn patch_merges_present_fields_only() {
        let mut target = campaigns().remove(0);
        let patch = CampaignPatchDto {
            commission_value: Some(175.0),
            status: Some(CampaignStatus::Accepted),
            ..Default::default()
        };

        patch.apply(&mut target);

        assert_eq!(target.commission_value, 175.0);
        assert_eq!(target.status, CampaignStatus::Accepted);
        assert_eq!(target.product_name, "Glow Serum");
    }
}
