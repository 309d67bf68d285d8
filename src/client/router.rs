use dioxus::prelude::*;

use crate::client::{
    components::layout::Layout,
    routes::{
        affiliate::{AffiliateCommissions, AffiliateDashboard, AffiliateReferrals},
        AnalyticsPage, CampaignBrowser, Dashboard, Landing, MessagingCenter, NotFound,
        ProductManagement, SettingsPage, WalletPage,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},

    #[nest("/app")]

        #[layout(Layout)]

        #[route("/")]
        Dashboard {},

        #[route("/campaigns")]
        CampaignBrowser {},

        #[route("/products")]
        ProductManagement {},

        #[route("/messages")]
        MessagingCenter {},

        #[route("/analytics")]
        AnalyticsPage {},

        #[route("/wallet")]
        WalletPage {},

        #[route("/settings")]
        SettingsPage {},

        #[route("/affiliate")]
        AffiliateDashboard {},

        #[route("/affiliate/referrals")]
        AffiliateReferrals {},

        #[route("/affiliate/commissions")]
        AffiliateCommissions {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
