mod billing;
mod notifications;
mod profile;
mod security;
mod social;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBell, FaCreditCard, FaShareNodes, FaShield, FaUser,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::Settings;

use crate::client::{
    api,
    components::{ErrorPanel, Loading, Page, PageHeader},
    util::LoadState,
};

use billing::BillingTab;
use notifications::NotificationsTab;
use profile::ProfileTab;
use security::SecurityTab;
use social::SocialTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Billing,
    Security,
    Social,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Billing,
        SettingsTab::Security,
        SettingsTab::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Billing => "Billing",
            SettingsTab::Security => "Security",
            SettingsTab::Social => "Social Accounts",
        }
    }

    fn icon(&self) -> Element {
        match self {
            SettingsTab::Profile => rsx!(Icon { width: 14, height: 14, icon: FaUser }),
            SettingsTab::Notifications => rsx!(Icon { width: 14, height: 14, icon: FaBell }),
            SettingsTab::Billing => rsx!(Icon { width: 14, height: 14, icon: FaCreditCard }),
            SettingsTab::Security => rsx!(Icon { width: 14, height: 14, icon: FaShield }),
            SettingsTab::Social => rsx!(Icon { width: 14, height: 14, icon: FaShareNodes }),
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let mut settings = use_signal(Settings::default);
    let mut state = use_signal(LoadState::default);
    let mut tab = use_signal(SettingsTab::default);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match api::settings::get_settings().await {
            Ok(loaded) => {
                settings.set(loaded);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load settings: {}", err);
                state.set(LoadState::Failed("Failed to load settings".to_string()));
            }
        }
    });

    let body = match state() {
        LoadState::Loading => rsx!(Loading { cards: 2 }),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => match tab() {
            SettingsTab::Profile => rsx!(ProfileTab { settings: settings }),
            SettingsTab::Notifications => rsx!(NotificationsTab { settings: settings }),
            SettingsTab::Billing => rsx!(BillingTab { settings: settings }),
            SettingsTab::Security => rsx!(SecurityTab {}),
            SettingsTab::Social => rsx!(SocialTab { settings: settings }),
        },
    };

    rsx!(
        Title { "Settings | InfluenceHub" }
        Meta {
            name: "description",
            content: "Profile, notification, billing and account settings."
        }
        Page {
            PageHeader {
                title: "Settings",
                subtitle: "Manage your account preferences and settings".to_string(),
            }
            div { class: "grid gap-6 lg:grid-cols-[220px_1fr]",
                ul { class: "menu bg-base-200 rounded-box w-full h-fit",
                    for choice in SettingsTab::ALL {
                        {
                            let label = choice.label();
                            let active = if tab() == choice { "menu-active" } else { "" };
                            rsx!(
                                li { key: "{label}",
                                    a {
                                        class: active,
                                        onclick: move |_| tab.set(choice),
                                        {choice.icon()}
                                        "{label}"
                                    }
                                }
                            )
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        {body}
                    }
                }
            }
        }
    )
}
