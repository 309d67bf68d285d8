pub mod atoms;
pub mod layout;
pub mod molecules;
pub mod page;
pub mod placeholder;
pub mod toast;

pub use atoms::{Badge, BadgeVariant, Button, ButtonVariant, Card, Input};
pub use molecules::{CampaignCard, ProductCard, SearchBar, StatCard, StatIcon};
pub use page::{Page, PageHeader};
pub use placeholder::{Empty, ErrorPanel, Loading};
pub use toast::ToastHost;
