use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::{Referral, ReferralStatus};

use super::{AffiliateNav, CURRENT_AFFILIATE_ID};
use crate::{
    client::{
        api,
        components::{Badge, BadgeVariant, Empty, ErrorPanel, Loading, Page, PageHeader},
        util::LoadState,
    },
    model::{affiliate::ReferralFilter, format},
};

const STATUSES: [ReferralStatus; 3] = [
    ReferralStatus::Pending,
    ReferralStatus::Converted,
    ReferralStatus::Expired,
];

#[component]
pub fn AffiliateReferrals() -> Element {
    let mut referrals = use_signal(Vec::<Referral>::new);
    let mut state = use_signal(LoadState::default);
    let mut filter = use_signal(ReferralFilter::default);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match api::affiliate::get_affiliate_referrals(CURRENT_AFFILIATE_ID).await {
            Ok(loaded) => {
                referrals.set(loaded);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load referrals: {}", err);
                state.set(LoadState::Failed("Failed to load referrals".to_string()));
            }
        }
    });

    let body = match state() {
        LoadState::Loading => rsx!(Loading { cards: 3 }),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => {
            let visible = filter.read().apply(&referrals.read());

            if visible.is_empty() {
                rsx!(Empty {
                    title: "No referrals found",
                    message: "Try a different search or status filter.",
                })
            } else {
                rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Signed Up" }
                                    th { "Plan" }
                                    th { "Status" }
                                    th { class: "text-right", "Commission" }
                                }
                            }
                            tbody {
                                for referral in visible {
                                    ReferralRow { key: "{referral.id}", referral: referral }
                                }
                            }
                        }
                    }
                )
            }
        }
    };

    let search = filter.read().search.clone();
    let status_value = filter.read().status.map(|s| s.as_str()).unwrap_or("");

    rsx!(
        Title { "Referrals | InfluenceHub" }
        Meta {
            name: "description",
            content: "People who signed up through your referral link."
        }
        Page {
            PageHeader {
                title: "Referrals",
                subtitle: "Track everyone who joined through your link".to_string(),
            }
            AffiliateNav {}
            div { class: "flex flex-col gap-2 sm:flex-row",
                input {
                    class: "input w-full",
                    placeholder: "Search by name or email...",
                    value: search,
                    oninput: move |evt| filter.write().search = evt.value(),
                }
                select {
                    class: "select sm:w-48",
                    value: status_value,
                    onchange: move |evt| {
                        let value = evt.value();
                        filter.write().status = STATUSES.into_iter().find(|s| s.as_str() == value);
                    },
                    option { value: "", "All statuses" }
                    for status in STATUSES {
                        {
                            let value = status.as_str();
                            rsx!(option { key: "{value}", value: value, "{value}" })
                        }
                    }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body", {body} }
            }
        }
    )
}

#[component]
fn ReferralRow(referral: Referral) -> Element {
    let signed_up = referral.signup_date.format("%b %d, %Y").to_string();
    let plan = referral
        .subscription_plan
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let status = referral.status.as_str();
    let commission = format::currency(referral.commission_earned);

    rsx!(
        tr {
            td {
                p { class: "font-medium", "{referral.name}" }
                p { class: "text-xs text-base-content/60", "{referral.email}" }
            }
            td { "{signed_up}" }
            td { "{plan}" }
            td {
                Badge {
                    variant: BadgeVariant::for_referral(referral.status),
                    small: true,
                    "{status}"
                }
            }
            td { class: "text-right", "{commission}" }
        }
    )
}
