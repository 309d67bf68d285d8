pub mod affiliate;
pub mod analytics;
pub mod campaigns;
pub mod dashboard;
pub mod landing;
pub mod messages;
pub mod not_found;
pub mod products;
pub mod settings;
pub mod wallet;

pub use analytics::AnalyticsPage;
pub use campaigns::CampaignBrowser;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use messages::MessagingCenter;
pub use not_found::NotFound;
pub use products::ProductManagement;
pub use settings::SettingsPage;
pub use wallet::WalletPage;
