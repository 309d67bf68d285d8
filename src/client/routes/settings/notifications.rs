use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::Settings;

use crate::{
    client::{api, components::Button, store::toast::ToastState},
    model::settings::SettingsPatchDto,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Preference {
    Email,
    Push,
    CampaignUpdates,
    ActivityStatus,
}

impl Preference {
    const ALL: [Preference; 4] = [
        Preference::Email,
        Preference::Push,
        Preference::CampaignUpdates,
        Preference::ActivityStatus,
    ];

    fn title(&self) -> &'static str {
        match self {
            Preference::Email => "Email Notifications",
            Preference::Push => "Push Notifications",
            Preference::CampaignUpdates => "Campaign Updates",
            Preference::ActivityStatus => "Show Activity Status",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Preference::Email => "Receive notifications via email",
            Preference::Push => "Receive push notifications in your browser",
            Preference::CampaignUpdates => "Get notified about new campaigns and updates",
            Preference::ActivityStatus => "Let others see when you are online",
        }
    }

    fn value(&self, settings: &Settings) -> bool {
        match self {
            Preference::Email => settings.email_notifications,
            Preference::Push => settings.push_notifications,
            Preference::CampaignUpdates => settings.campaign_updates,
            Preference::ActivityStatus => settings.show_activity_status,
        }
    }

    fn set(&self, settings: &mut Settings, enabled: bool) {
        match self {
            Preference::Email => settings.email_notifications = enabled,
            Preference::Push => settings.push_notifications = enabled,
            Preference::CampaignUpdates => settings.campaign_updates = enabled,
            Preference::ActivityStatus => settings.show_activity_status = enabled,
        }
    }
}

#[component]
pub fn NotificationsTab(settings: Signal<Settings>) -> Element {
    let mut settings = settings;
    let mut toasts = use_context::<Store<ToastState>>();

    let mut draft = use_signal(|| settings());
    let mut saving = use_signal(|| false);

    let save = move |_: MouseEvent| {
        let patch = SettingsPatchDto::notifications(&draft.read());
        saving.set(true);

        spawn(async move {
            match api::settings::update_settings(&patch).await {
                Ok(updated) => {
                    settings.set(updated);
                    toasts.write().success("Settings updated successfully");
                }
                Err(err) => {
                    tracing::warn!("Failed to save notification preferences: {}", err);
                    toasts.write().error("Failed to save settings");
                }
            }
            saving.set(false);
        });
    };

    let current = draft();

    rsx!(
        h3 { class: "card-title", "Notification Preferences" }
        ul { class: "flex flex-col divide-y divide-base-300",
            for preference in Preference::ALL {
                {
                    let title = preference.title();
                    let description = preference.description();
                    let checked = preference.value(&current);
                    rsx!(
                        li { key: "{title}", class: "flex items-center justify-between py-4",
                            div {
                                p { class: "font-medium", "{title}" }
                                p { class: "text-sm text-base-content/60", "{description}" }
                            }
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-primary",
                                checked: checked,
                                onchange: move |evt| {
                                    preference.set(&mut draft.write(), evt.checked());
                                },
                            }
                        }
                    )
                }
            }
        }
        div { class: "flex justify-end",
            Button {
                loading: saving(),
                onclick: save,
                "Save Preferences"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_write_their_own_flag() {
        let mut settings = Settings::default();

        Preference::CampaignUpdates.set(&mut settings, true);
        assert!(settings.campaign_updates);
        assert!(!settings.email_notifications);
        assert!(Preference::CampaignUpdates.value(&settings));
    }
}
