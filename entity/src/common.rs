use std::fmt;

use serde::{Deserialize, Serialize};

/// Market segment a campaign, product or influencer belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum Niche {
    Fashion,
    Beauty,
    Tech,
    Food,
    Lifestyle,
    Sports,
    Gaming,
}

impl Niche {
    pub const ALL: [Niche; 7] = [
        Niche::Fashion,
        Niche::Beauty,
        Niche::Tech,
        Niche::Food,
        Niche::Lifestyle,
        Niche::Sports,
        Niche::Gaming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Fashion => "Fashion",
            Niche::Beauty => "Beauty",
            Niche::Tech => "Tech",
            Niche::Food => "Food",
            Niche::Lifestyle => "Lifestyle",
            Niche::Sports => "Sports",
            Niche::Gaming => "Gaming",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|niche| niche.as_str() == value)
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an influencer is paid for a campaign or product promotion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    #[default]
    PerPost,
    PerSale,
    ProductInHand,
    Combo,
}

impl CommissionType {
    pub const ALL: [CommissionType; 4] = [
        CommissionType::PerPost,
        CommissionType::PerSale,
        CommissionType::ProductInHand,
        CommissionType::Combo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionType::PerPost => "per_post",
            CommissionType::PerSale => "per_sale",
            CommissionType::ProductInHand => "product_in_hand",
            CommissionType::Combo => "combo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommissionType::PerPost => "Per Post",
            CommissionType::PerSale => "Per Sale (%)",
            CommissionType::ProductInHand => "Product + Commission",
            CommissionType::Combo => "Combo Deal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Human readable commission, e.g. `$150 per post` or `15% per sale`.
    pub fn describe(&self, value: f64) -> String {
        match self {
            CommissionType::PerPost => format!("${} per post", value),
            CommissionType::PerSale => format!("{}% per sale", value),
            CommissionType::ProductInHand => "Product + commission".to_string(),
            CommissionType::Combo => "Combo deal".to_string(),
        }
    }
}

/// Tone of an influencer's content, used by SmartMatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ContentStyle {
    Authentic,
    Professional,
    Creative,
    Educational,
    Entertaining,
}

impl ContentStyle {
    pub const ALL: [ContentStyle; 5] = [
        ContentStyle::Authentic,
        ContentStyle::Professional,
        ContentStyle::Creative,
        ContentStyle::Educational,
        ContentStyle::Entertaining,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStyle::Authentic => "authentic",
            ContentStyle::Professional => "professional",
            ContentStyle::Creative => "creative",
            ContentStyle::Educational => "educational",
            ContentStyle::Entertaining => "entertaining",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentStyle::Authentic => "Authentic & Personal",
            ContentStyle::Professional => "Professional & Polished",
            ContentStyle::Creative => "Creative & Artistic",
            ContentStyle::Educational => "Educational & Informative",
            ContentStyle::Entertaining => "Fun & Entertaining",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }
}

/// Engagement band of an influencer audience, ordered from lowest to highest.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EngagementTier {
    Low,
    #[default]
    Medium,
    High,
    Premium,
}

impl EngagementTier {
    pub const ALL: [EngagementTier; 4] = [
        EngagementTier::Low,
        EngagementTier::Medium,
        EngagementTier::High,
        EngagementTier::Premium,
    ];

    /// Position of the tier on the 1..=4 scale used for tier distance.
    pub fn rank(&self) -> u8 {
        match self {
            EngagementTier::Low => 1,
            EngagementTier::Medium => 2,
            EngagementTier::High => 3,
            EngagementTier::Premium => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementTier::Low => "low",
            EngagementTier::Medium => "medium",
            EngagementTier::High => "high",
            EngagementTier::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementTier::Low => "Low (1-3%)",
            EngagementTier::Medium => "Medium (3-6%)",
            EngagementTier::High => "High (6-10%)",
            EngagementTier::Premium => "Premium (10%+)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn niche_parses_its_own_name() {
        for niche in Niche::ALL {
            assert_eq!(Niche::parse(niche.as_str()), Some(niche));
        }
        assert_eq!(Niche::parse("Pets"), None);
    }

    #[test]
    fn commission_type_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&CommissionType::ProductInHand).unwrap();
        assert_eq!(json, "\"product_in_hand\"");
    }

    #[test]
    fn commission_description_depends_on_type() {
        assert_eq!(CommissionType::PerPost.describe(150.0), "$150 per post");
        assert_eq!(CommissionType::PerSale.describe(12.5), "12.5% per sale");
        assert_eq!(CommissionType::Combo.describe(99.0), "Combo deal");
    }

    #[test]
    fn engagement_tiers_rank_in_order() {
        let ranks: Vec<u8> = EngagementTier::ALL.iter().map(|t| t.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }
}
