//! Affiliate program pages: overview, referrals and commissions.

mod commissions;
mod dashboard;
mod referrals;

use dioxus::prelude::*;

use crate::client::router::Route;

pub use commissions::AffiliateCommissions;
pub use dashboard::AffiliateDashboard;
pub use referrals::AffiliateReferrals;

/// Affiliate account the signed in user browses the program as.
pub const CURRENT_AFFILIATE_ID: i32 = 1;

/// Tabs linking the three affiliate pages.
#[component]
fn AffiliateNav() -> Element {
    rsx!(
        div { role: "tablist", class: "tabs tabs-box w-fit",
            Link {
                to: Route::AffiliateDashboard {},
                class: "tab",
                active_class: "tab-active",
                "Overview"
            }
            Link {
                to: Route::AffiliateReferrals {},
                class: "tab",
                active_class: "tab-active",
                "Referrals"
            }
            Link {
                to: Route::AffiliateCommissions {},
                class: "tab",
                active_class: "tab-active",
                "Commissions"
            }
        }
    )
}
