use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{
    FaFacebook, FaInstagram, FaLinkedin, FaTiktok, FaTwitter, FaYoutube,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::{Settings, SocialAccounts, SocialPlatform};

use crate::{
    client::{
        api,
        components::{Button, ButtonVariant},
        store::toast::ToastState,
    },
    model::format,
};

const VERIFICATION_LOST_MESSAGE: &str = "You now have fewer than 2 connected platforms. \
    Please connect more to maintain verification status.";

fn platform_icon(platform: SocialPlatform) -> Element {
    match platform {
        SocialPlatform::Youtube => rsx!(Icon { width: 20, height: 20, icon: FaYoutube }),
        SocialPlatform::Tiktok => rsx!(Icon { width: 20, height: 20, icon: FaTiktok }),
        SocialPlatform::Facebook => rsx!(Icon { width: 20, height: 20, icon: FaFacebook }),
        SocialPlatform::Instagram => rsx!(Icon { width: 20, height: 20, icon: FaInstagram }),
        SocialPlatform::Twitter => rsx!(Icon { width: 20, height: 20, icon: FaTwitter }),
        SocialPlatform::Linkedin => rsx!(Icon { width: 20, height: 20, icon: FaLinkedin }),
    }
}

#[component]
pub fn SocialTab(settings: Signal<Settings>) -> Element {
    let mut settings = settings;
    let mut toasts = use_context::<Store<ToastState>>();
    let mut busy = use_signal(|| None::<SocialPlatform>);

    let mut toggle = move |platform: SocialPlatform, connect: bool| {
        busy.set(Some(platform));

        spawn(async move {
            let name = platform.display_name();
            let result = if connect {
                api::settings::connect_social_account(platform).await
            } else {
                api::settings::disconnect_social_account(platform).await
            };

            match result {
                Ok(change) => {
                    *settings.write().social_accounts.get_mut(change.platform) = change.account;
                    if connect {
                        toasts.write().success(format!("Successfully connected {}", name));
                    } else {
                        toasts.write().success(format!("Successfully disconnected {}", name));
                        if !change.meets_verification_minimum {
                            toasts.write().info(VERIFICATION_LOST_MESSAGE);
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!("Social account change for {} failed: {}", name, err);
                    let action = if connect { "connect" } else { "disconnect" };
                    toasts.write().error(format!("Failed to {} {}", action, name));
                }
            }
            busy.set(None);
        });
    };

    let accounts = settings.read().social_accounts.clone();
    let connected = accounts.connected_platforms().len();
    let minimum = SocialAccounts::VERIFICATION_MINIMUM;
    let verified = accounts.meets_verification_minimum();

    rsx!(
        h3 { class: "card-title", "Social Media Accounts" }
        if verified {
            div { role: "alert", class: "alert alert-success",
                "Verified creator · {connected} platforms connected"
            }
        } else {
            div { role: "alert", class: "alert alert-warning",
                "Connect at least {minimum} platforms to get verified. "
                "{connected} connected so far."
            }
        }
        ul { class: "flex flex-col divide-y divide-base-300",
            for platform in SocialPlatform::ALL {
                {
                    let account = accounts.get(platform).clone();
                    let name = platform.display_name();
                    let loading = busy() == Some(platform);
                    let followers = format::compact(account.follower_count);
                    let is_connected = account.connected;
                    rsx!(
                        li { key: "{name}", class: "flex items-center justify-between py-4",
                            div { class: "flex items-center gap-3",
                                {platform_icon(platform)}
                                div {
                                    p { class: "font-medium", "{name}" }
                                    if is_connected {
                                        p { class: "text-sm text-base-content/60",
                                            "@{account.username} · {followers} followers"
                                        }
                                    } else {
                                        p { class: "text-sm text-base-content/60", "Not connected" }
                                    }
                                }
                            }
                            if is_connected {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    loading: loading,
                                    onclick: move |_| toggle(platform, false),
                                    "Disconnect"
                                }
                            } else {
                                Button {
                                    small: true,
                                    loading: loading,
                                    onclick: move |_| toggle(platform, true),
                                    "Connect"
                                }
                            }
                        }
                    )
                }
            }
        }
    )
}
