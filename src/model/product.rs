use entity::prelude::{CommissionType, ContentStyle, EngagementTier, Niche, Product};
use serde::{Deserialize, Serialize};

/// Toast shown when the product form is submitted with a blank required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Body of `POST /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewProductDto {
    pub name: String,
    pub price: f64,
    pub niche: Niche,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub commission_type: CommissionType,
    #[serde(default)]
    pub commission_value: f64,
    #[serde(default)]
    pub smart_match: bool,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub content_style: Option<ContentStyle>,
    #[serde(default)]
    pub engagement_tier: Option<EngagementTier>,
    #[serde(default)]
    pub quality_score: Option<u8>,
}

impl NewProductDto {
    /// Whether name, price, niche and description are all filled in.
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.price.is_finite()
            && self.price > 0.0
    }
}

/// Body of `PATCH /api/products/{id}`, absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductPatchDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub niche: Option<Niche>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub commission_type: Option<CommissionType>,
    pub commission_value: Option<f64>,
    pub smart_match: Option<bool>,
    pub target_audience: Option<String>,
    pub content_style: Option<ContentStyle>,
    pub engagement_tier: Option<EngagementTier>,
    pub quality_score: Option<u8>,
}

impl ProductPatchDto {
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(niche) = self.niche {
            product.niche = niche;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(commission_type) = self.commission_type {
            product.commission_type = commission_type;
        }
        if let Some(commission_value) = self.commission_value {
            product.commission_value = commission_value;
        }
        if let Some(smart_match) = self.smart_match {
            product.smart_match = smart_match;
        }
        if let Some(target_audience) = self.target_audience {
            product.target_audience = Some(target_audience);
        }
        if let Some(content_style) = self.content_style {
            product.content_style = Some(content_style);
        }
        if let Some(engagement_tier) = self.engagement_tier {
            product.engagement_tier = Some(engagement_tier);
        }
        if let Some(quality_score) = self.quality_score {
            product.quality_score = Some(quality_score);
        }
    }
}

impl From<NewProductDto> for ProductPatchDto {
    fn from(product: NewProductDto) -> Self {
        Self {
            name: Some(product.name),
            price: Some(product.price),
            niche: Some(product.niche),
            description: Some(product.description),
            images: Some(product.images),
            commission_type: Some(product.commission_type),
            commission_value: Some(product.commission_value),
            smart_match: Some(product.smart_match),
            target_audience: product.target_audience,
            content_style: product.content_style,
            engagement_tier: product.engagement_tier,
            quality_score: product.quality_score,
        }
    }
}

/// Raw, not yet validated state of the add/edit product form.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub niche: Option<Niche>,
    pub description: String,
    pub images: Vec<String>,
    pub commission_type: CommissionType,
    pub commission_value: String,
    pub smart_match: bool,
    pub target_audience: String,
    pub content_style: Option<ContentStyle>,
    pub engagement_tier: EngagementTier,
    pub quality_score: u8,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            niche: None,
            description: String::new(),
            images: Vec::new(),
            commission_type: CommissionType::PerPost,
            commission_value: String::new(),
            smart_match: false,
            target_audience: String::new(),
            content_style: None,
            engagement_tier: EngagementTier::Medium,
            quality_score: 3,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            niche: Some(product.niche),
            description: product.description.clone(),
            images: product.images.clone(),
            commission_type: product.commission_type,
            commission_value: product.commission_value.to_string(),
            smart_match: product.smart_match,
            target_audience: product.target_audience.clone().unwrap_or_default(),
            content_style: product.content_style,
            engagement_tier: product.engagement_tier.unwrap_or_default(),
            quality_score: product.quality_score.unwrap_or(3),
        }
    }

    /// Validate the form into a request body.
    ///
    /// # Returns
    /// - `Ok(NewProductDto)` - Name, price, niche and description are present
    /// - `Err(&str)` - The message to show the user
    pub fn validate(&self) -> Result<NewProductDto, &'static str> {
        let price = self.price.trim().parse::<f64>().ok();
        let (Some(niche), Some(price)) = (self.niche, price) else {
            return Err(REQUIRED_FIELDS_MESSAGE);
        };

        let product = NewProductDto {
            name: self.name.trim().to_string(),
            price,
            niche,
            description: self.description.trim().to_string(),
            images: self.images.clone(),
            commission_type: self.commission_type,
            commission_value: self.commission_value.trim().parse().unwrap_or(0.0),
            smart_match: self.smart_match,
            target_audience: Some(self.target_audience.trim().to_string())
                .filter(|audience| !audience.is_empty()),
            content_style: self.content_style,
            engagement_tier: Some(self.engagement_tier),
            quality_score: Some(self.quality_score),
        };

        if !product.has_required_fields() {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }

        Ok(product)
    }

    /// SmartMatch criteria described by the form, `None` until a niche is chosen.
    pub fn criteria(&self, boost_active: bool, boost_multiplier: f64) -> Option<MatchCriteria> {
        let niche = self.niche?;

        Some(MatchCriteria {
            niche: Some(niche),
            target_audience: Some(self.target_audience.clone()).filter(|a| !a.is_empty()),
            content_style: self.content_style,
            engagement_tier: self.engagement_tier,
            quality_score: self.quality_score,
            boost_active,
            boost_multiplier,
        })
    }
}

/// What a store is looking for in an influencer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchCriteria {
    #[serde(default)]
    pub niche: Option<Niche>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub content_style: Option<ContentStyle>,
    #[serde(default)]
    pub engagement_tier: EngagementTier,
    #[serde(default = "default_quality_score")]
    pub quality_score: u8,
    #[serde(default)]
    pub boost_active: bool,
    #[serde(default = "default_boost_multiplier")]
    pub boost_multiplier: f64,
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            niche: None,
            target_audience: None,
            content_style: None,
            engagement_tier: EngagementTier::Medium,
            quality_score: default_quality_score(),
            boost_active: false,
            boost_multiplier: default_boost_multiplier(),
        }
    }
}

fn default_quality_score() -> u8 {
    3
}

fn default_boost_multiplier() -> f64 {
    1.0
}

/// A synthetic influencer from the SmartMatch pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub niche: Niche,
    pub secondary_niches: Vec<Niche>,
    /// Audience size rendered for display, e.g. `245K`
    pub followers: String,
    /// Engagement rate rendered for display, e.g. `4.2%`
    pub engagement: String,
    pub quality_score: u8,
    pub content_style: ContentStyle,
    pub engagement_tier: EngagementTier,
    pub average_views: u64,
    pub response_rate: u8,
}

/// An influencer recommended for a product together with its match score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InfluencerMatch {
    #[serde(flatten)]
    pub influencer: InfluencerProfile,
    /// 0 to 100
    pub match_score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, utoipa::IntoParams))]
pub struct BoostRequestDto {
    pub multiplier: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BoostCostDto {
    pub multiplier: f64,
    /// Cost per day in dollars
    pub daily_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BoostActivationDto {
    pub success: bool,
    pub cost: f64,
    /// Extra visibility in percent
    pub visibility_increase: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Glow Serum".to_string(),
            price: "34.99".to_string(),
            niche: Some(Niche::Beauty),
            description: "Vitamin C serum".to_string(),
            commission_value: "150".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_validates() {
        let product = filled_form().validate().unwrap();

        assert_eq!(product.price, 34.99);
        assert_eq!(product.commission_value, 150.0);
        assert_eq!(product.target_audience, None);
    }

    #[test]
    fn each_required_field_is_enforced() {
        let mut form = filled_form();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(REQUIRED_FIELDS_MESSAGE));

        let mut form = filled_form();
        form.price = "free".to_string();
        assert_eq!(form.validate(), Err(REQUIRED_FIELDS_MESSAGE));

        let mut form = filled_form();
        form.niche = None;
        assert_eq!(form.validate(), Err(REQUIRED_FIELDS_MESSAGE));

        let mut form = filled_form();
        form.description.clear();
        assert_eq!(form.validate(), Err(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn criteria_need_a_niche() {
        let mut form = filled_form();
        assert!(form.criteria(false, 1.0).is_some());

        form.niche = None;
        assert!(form.criteria(false, 1.0).is_none());
    }

    #[test]
    fn criteria_defaults_when_fields_are_omitted() {
        let criteria: MatchCriteria = serde_json::from_str(r#"{"niche":"Tech"}"#).unwrap();

        assert_eq!(criteria.niche, Some(Niche::Tech));
        assert_eq!(criteria.quality_score, 3);
        assert_eq!(criteria.engagement_tier, EngagementTier::Medium);
        assert_eq!(criteria.boost_multiplier, 1.0);
    }
}
