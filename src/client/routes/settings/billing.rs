use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::{Settings, SubscriptionTier};

use crate::{
    client::{
        api,
        components::{Button, ButtonVariant, ErrorPanel},
        store::toast::ToastState,
    },
    model::{
        format,
        settings::{billing_label, SlotUsageDto},
    },
};

/// `"upgrade"` when moving to a larger plan, `"downgrade"` otherwise.
pub fn change_action(current: SubscriptionTier, next: SubscriptionTier) -> &'static str {
    if next > current {
        "upgrade"
    } else {
        "downgrade"
    }
}

#[component]
pub fn BillingTab(settings: Signal<Settings>) -> Element {
    let mut settings = settings;
    let mut toasts = use_context::<Store<ToastState>>();

    let mut pending = use_signal(|| None::<SubscriptionTier>);
    let mut saving = use_signal(|| false);

    let mut tiers = use_resource(|| async move { api::settings::get_subscription_tiers().await });
    let mut slots = use_resource(|| async move { api::settings::get_slot_usage().await });

    let confirm = move |_: MouseEvent| {
        let Some(next) = pending() else {
            return;
        };
        let action = change_action(settings.read().subscription_tier, next);
        pending.set(None);
        saving.set(true);

        spawn(async move {
            match api::settings::update_subscription_tier(next.as_str()).await {
                Ok(updated) => {
                    settings.set(updated);
                    slots.restart();
                    toasts.write().success(format!(
                        "Successfully {}d to {} plan",
                        action,
                        next.display_name()
                    ));
                }
                Err(err) => {
                    tracing::warn!("Failed to change subscription: {}", err);
                    toasts.write().error(format!("Failed to {} subscription plan", action));
                }
            }
            saving.set(false);
        });
    };

    let current = settings.read().subscription_tier;
    let current_name = current.display_name();
    let next_billing = billing_label(settings.read().next_billing_date);

    let usage = match &*slots.read() {
        Some(Ok(usage)) => rsx!(SlotMeter { usage: *usage }),
        Some(Err(_)) => rsx!(
            p { class: "text-sm text-error", "Slot usage is unavailable" }
        ),
        None => rsx!(div { class: "skeleton h-6 w-full" }),
    };

    let plans = match &*tiers.read() {
        None => rsx!(div { class: "skeleton h-48 w-full" }),
        Some(Err(_)) => rsx!(ErrorPanel {
            message: "Failed to load subscription plans",
            onretry: move |_| tiers.restart(),
        }),
        Some(Ok(catalogue)) => rsx!(
            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-4",
                for plan in catalogue.iter().cloned() {
                    {
                        let is_current = plan.tier == current;
                        let price = format::currency(plan.price);
                        let border = if is_current { "border-primary" } else { "border-base-300" };
                        let tier = plan.tier;
                        rsx!(
                            div { key: "{plan.name}", class: "card border-2 {border}",
                                div { class: "card-body gap-2",
                                    h4 { class: "font-semibold text-lg", "{plan.name}" }
                                    p { class: "text-2xl font-bold",
                                        "{price}"
                                        span { class: "text-sm font-normal text-base-content/60",
                                            "/month"
                                        }
                                    }
                                    ul { class: "text-sm flex flex-col gap-1",
                                        for feature in plan.features.iter().cloned() {
                                            li { key: "{feature}", class: "flex items-center gap-2",
                                                Icon { width: 12, height: 12, icon: FaCheck }
                                                "{feature}"
                                            }
                                        }
                                    }
                                    if is_current {
                                        span { class: "badge badge-primary mt-2", "Current Plan" }
                                    } else {
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            small: true,
                                            disabled: saving(),
                                            onclick: move |_| pending.set(Some(tier)),
                                            "Select Plan"
                                        }
                                    }
                                }
                            }
                        )
                    }
                }
            }
        ),
    };

    let confirmation = pending().map(|next| {
        let action = change_action(current, next);
        let name = next.display_name();
        rsx!(
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Change plan" }
                    p { class: "py-4", "Are you sure you want to {action} to the {name} plan?" }
                    div { class: "modal-action",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| pending.set(None),
                            "Cancel"
                        }
                        Button { onclick: confirm, "Confirm" }
                    }
                }
            }
        )
    });

    rsx!(
        h3 { class: "card-title", "Billing & Subscription" }
        div { class: "grid gap-4 md:grid-cols-2",
            div { class: "rounded-lg bg-base-200 p-4",
                p { class: "text-sm text-base-content/60", "Current Plan" }
                p { class: "text-xl font-semibold", "{current_name}" }
                p { class: "text-sm text-base-content/60 mt-2",
                    "Next billing date: {next_billing}"
                }
            }
            div { class: "rounded-lg bg-base-200 p-4",
                p { class: "text-sm text-base-content/60 mb-2", "Campaign Slots" }
                {usage}
            }
        }
        {plans}
        {confirmation}
    )
}

#[component]
fn SlotMeter(usage: SlotUsageDto) -> Element {
    let percentage = usage.percentage.round() as u32;
    let tone = if usage.percentage >= 90.0 { "progress-error" } else { "progress-primary" };

    rsx!(
        progress { class: "progress {tone} w-full", value: "{percentage}", max: "100" }
        p { class: "text-sm mt-2",
            "{usage.used} of {usage.total} used · {usage.remaining} remaining"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_to_a_larger_plan_is_an_upgrade() {
        assert_eq!(change_action(SubscriptionTier::Free, SubscriptionTier::Growth), "upgrade");
        assert_eq!(change_action(SubscriptionTier::Pro, SubscriptionTier::Starter), "downgrade");
    }
}
