pub mod campaign_card;
pub mod product_card;
pub mod search_bar;
pub mod stat_card;

pub use campaign_card::CampaignCard;
pub use product_card::ProductCard;
pub use search_bar::SearchBar;
pub use stat_card::{StatCard, StatIcon};
