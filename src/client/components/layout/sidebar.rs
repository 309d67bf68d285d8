use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBolt, FaBoxOpen, FaBullseye, FaChartColumn, FaComments, FaCrown, FaGaugeHigh, FaGear,
    FaMagnifyingGlass, FaUserGroup, FaWallet, FaXmark,
};
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    store::session::{Role, SessionState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Campaigns,
    Browse,
    Products,
    Messages,
    Analytics,
    Wallet,
    Settings,
    Affiliate,
}

impl NavIcon {
    fn render(&self) -> Element {
        match self {
            NavIcon::Dashboard => rsx!(Icon { width: 18, height: 18, icon: FaGaugeHigh }),
            NavIcon::Campaigns => rsx!(Icon { width: 18, height: 18, icon: FaBullseye }),
            NavIcon::Browse => rsx!(Icon { width: 18, height: 18, icon: FaMagnifyingGlass }),
            NavIcon::Products => rsx!(Icon { width: 18, height: 18, icon: FaBoxOpen }),
            NavIcon::Messages => rsx!(Icon { width: 18, height: 18, icon: FaComments }),
            NavIcon::Analytics => rsx!(Icon { width: 18, height: 18, icon: FaChartColumn }),
            NavIcon::Wallet => rsx!(Icon { width: 18, height: 18, icon: FaWallet }),
            NavIcon::Settings => rsx!(Icon { width: 18, height: 18, icon: FaGear }),
            NavIcon::Affiliate => rsx!(Icon { width: 18, height: 18, icon: FaUserGroup }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: NavIcon,
}

/// Sidebar entries for `role`. Only store owners manage products.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        route: Route::Dashboard {},
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    }];

    match role {
        Role::StoreOwner => {
            items.push(NavItem {
                route: Route::CampaignBrowser {},
                label: "Campaigns",
                icon: NavIcon::Campaigns,
            });
            items.push(NavItem {
                route: Route::ProductManagement {},
                label: "Products",
                icon: NavIcon::Products,
            });
        }
        Role::Influencer => items.push(NavItem {
            route: Route::CampaignBrowser {},
            label: "Browse Campaigns",
            icon: NavIcon::Browse,
        }),
    }

    items.extend([
        NavItem {
            route: Route::MessagingCenter {},
            label: "Messages",
            icon: NavIcon::Messages,
        },
        NavItem {
            route: Route::AnalyticsPage {},
            label: "Analytics",
            icon: NavIcon::Analytics,
        },
        NavItem {
            route: Route::WalletPage {},
            label: "Wallet",
            icon: NavIcon::Wallet,
        },
        NavItem {
            route: Route::AffiliateDashboard {},
            label: "Affiliate Program",
            icon: NavIcon::Affiliate,
        },
        NavItem {
            route: Route::SettingsPage {},
            label: "Settings",
            icon: NavIcon::Settings,
        },
    ]);

    items
}

#[component]
pub fn Sidebar() -> Element {
    let mut session = use_context::<Store<SessionState>>();
    let role = session.read().role;
    let role_label = role.label();
    let open = session.read().sidebar_open;
    let drawer_class = if open { "translate-x-0" } else { "-translate-x-full" };

    rsx! {
        if open {
            div {
                class: "fixed inset-0 bg-black/50 z-40 lg:hidden",
                onclick: move |_| session.write().sidebar_open = false,
            }
        }
        aside {
            class: "fixed lg:static inset-y-0 left-0 z-50 w-64 bg-base-200",
            class: "border-r border-base-300 flex flex-col transition-transform",
            class: "lg:translate-x-0 {drawer_class}",
            div { class: "p-6 border-b border-base-300 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    div {
                        class: "w-8 h-8 rounded-lg bg-primary text-primary-content",
                        class: "flex items-center justify-center",
                        Icon { width: 16, height: 16, icon: FaBolt }
                    }
                    span { class: "text-xl font-bold",
                        "InfluenceHub"
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-sm btn-square lg:hidden",
                    onclick: move |_| session.write().sidebar_open = false,
                    Icon { width: 14, height: 14, icon: FaXmark }
                }
            }
            ul { class: "menu flex-1 w-full p-4 gap-1",
                for item in nav_items(role) {
                    li { key: "{item.label}",
                        Link {
                            to: item.route.clone(),
                            active_class: "menu-active",
                            onclick: move |_| session.write().sidebar_open = false,
                            {item.icon.render()}
                            "{item.label}"
                        }
                    }
                }
            }
            div { class: "p-4 border-t border-base-300",
                div { class: "rounded-lg bg-base-300 p-3",
                    div { class: "flex items-center gap-2 mb-1",
                        span { class: "text-warning",
                            Icon { width: 14, height: 14, icon: FaCrown }
                        }
                        span { class: "text-sm font-medium",
                            "{role_label}"
                        }
                    }
                    Link {
                        to: Route::SettingsPage {},
                        class: "text-xs link link-hover text-base-content/60",
                        "Manage plan and slots"
                    }
                }
            }
        }
    }
}
