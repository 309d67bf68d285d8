use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::Campaign;

use crate::{
    client::{
        api,
        components::{
            CampaignCard, Empty, ErrorPanel, Loading, Page, PageHeader, StatCard, StatIcon,
        },
        router::Route,
        store::{
            session::{Role, SessionState},
            toast::ToastState,
        },
        util::LoadState,
    },
    model::{
        analytics::{AnalyticsDto, TimeRange},
        format,
    },
};

/// Campaigns shown in the "recent" grid.
pub const DASHBOARD_CAMPAIGNS: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

/// Headline numbers for `role` from the thirty day report.
///
/// `available_campaigns` is the total number of campaigns on the marketplace.
pub fn dashboard_stats(
    role: Role,
    report: &AnalyticsDto,
    available_campaigns: usize,
) -> Vec<DashboardStat> {
    match role {
        Role::StoreOwner => vec![
            DashboardStat {
                title: "Active Campaigns",
                value: report.active_campaigns.to_string(),
                icon: StatIcon::Campaigns,
            },
            DashboardStat {
                title: "Total Revenue",
                value: format::currency(report.total_revenue),
                icon: StatIcon::Revenue,
            },
            DashboardStat {
                title: "Total Views",
                value: format::compact(report.total_views),
                icon: StatIcon::Views,
            },
            DashboardStat {
                title: "Conversion Rate",
                value: format::percent(report.conversion_rate),
                icon: StatIcon::Trend,
            },
        ],
        Role::Influencer => vec![
            DashboardStat {
                title: "Available Campaigns",
                value: available_campaigns.to_string(),
                icon: StatIcon::Campaigns,
            },
            DashboardStat {
                title: "Total Earnings",
                value: format::currency(report.total_earnings),
                icon: StatIcon::Revenue,
            },
            DashboardStat {
                title: "Completed Campaigns",
                value: report.completed_campaigns.to_string(),
                icon: StatIcon::Completed,
            },
            DashboardStat {
                title: "Success Rate",
                value: format::percent(report.success_rate),
                icon: StatIcon::Trend,
            },
        ],
    }
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Store<SessionState>>();
    let mut toasts = use_context::<Store<ToastState>>();
    let role = session.read().role;

    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut available = use_signal(|| 0usize);
    let mut report = use_signal(|| None::<AnalyticsDto>);
    let mut state = use_signal(LoadState::default);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        let page = api::campaign::get_campaigns(1, DASHBOARD_CAMPAIGNS).await;
        let analytics = api::analytics::get_analytics(TimeRange::Month).await;

        match (page, analytics) {
            (Ok(page), Ok(analytics)) => {
                available.set(page.total);
                campaigns.set(page.items);
                report.set(Some(analytics));
                state.set(LoadState::Ready);
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("Failed to load dashboard: {}", err);
                state.set(LoadState::Failed("Failed to load dashboard data".to_string()));
            }
        }
    });

    let update_status = move |id: i32, accept: bool| {
        spawn(async move {
            let result = if accept {
                api::campaign::accept_campaign(id).await
            } else {
                api::campaign::decline_campaign(id).await
            };

            match result {
                Ok(updated) => {
                    if let Some(campaign) = campaigns.write().iter_mut().find(|c| c.id == id) {
                        *campaign = updated;
                    }
                    toasts.write().success(if accept {
                        "Campaign accepted"
                    } else {
                        "Campaign declined"
                    });
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
        });
    };

    let (title, subtitle) = match role {
        Role::StoreOwner => (
            "Store Dashboard",
            "Manage your products and campaigns through InfluenceHub",
        ),
        Role::Influencer => (
            "Influencer Dashboard",
            "Discover new campaigns and track your performance through InfluenceHub",
        ),
    };

    let body = match state() {
        LoadState::Loading => rsx!(Loading {}),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => {
            let stats = report
                .read()
                .as_ref()
                .map(|report| dashboard_stats(role, report, available()))
                .unwrap_or_default();
            let recent = campaigns();

            rsx!(
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    for stat in stats {
                        StatCard {
                            key: "{stat.title}",
                            title: stat.title.to_string(),
                            value: stat.value,
                            icon: stat.icon,
                        }
                    }
                }
                div { class: "flex items-center justify-between",
                    h2 { class: "text-xl font-semibold",
                        "Recent Campaigns"
                    }
                    Link {
                        to: Route::CampaignBrowser {},
                        class: "btn btn-ghost btn-sm",
                        "View all"
                    }
                }
                if recent.is_empty() {
                    Empty {
                        title: "No campaigns yet",
                        message: "New collaboration offers will show up here.",
                    }
                } else {
                    div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                        for campaign in recent {
                            CampaignCard {
                                key: "{campaign.id}",
                                campaign: campaign,
                                onaccept: move |id| update_status(id, true),
                                ondecline: move |id| update_status(id, false),
                            }
                        }
                    }
                }
            )
        }
    };

    rsx!(
        Title { "Dashboard | InfluenceHub" }
        Meta {
            name: "description",
            content: "Campaign and performance overview."
        }
        Page {
            PageHeader {
                title: title.to_string(),
                subtitle: subtitle.to_string(),
            }
            {body}
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AnalyticsDto {
        AnalyticsDto {
            time_range: TimeRange::Month,
            total_revenue: 4250.0,
            total_earnings: 1890.0,
            active_campaigns: 12,
            completed_campaigns: 15,
            total_views: 245_000,
            total_engagement: 18_000,
            conversion_rate: 12.5,
            success_rate: 94.0,
            chart_data: Vec::new(),
            top_products: Vec::new(),
            top_influencers: Vec::new(),
        }
    }

    #[test]
    fn store_owner_sees_revenue_and_conversion() {
        let stats = dashboard_stats(Role::StoreOwner, &report(), 30);

        assert_eq!(stats[0].value, "12");
        assert_eq!(stats[1].value, "$4,250.00");
        assert_eq!(stats[2].value, "245.0K");
        assert_eq!(stats[3].value, "12.5%");
    }

    #[test]
    fn influencer_sees_available_campaigns_and_earnings() {
        let stats = dashboard_stats(Role::Influencer, &report(), 30);

        assert_eq!(stats[0].title, "Available Campaigns");
        assert_eq!(stats[0].value, "30");
        assert_eq!(stats[1].value, "$1,890.00");
        assert_eq!(stats[3].value, "94.0%");
    }
}
