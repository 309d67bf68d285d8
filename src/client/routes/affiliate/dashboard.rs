use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaTrophy};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::Affiliate;

use super::{AffiliateNav, CURRENT_AFFILIATE_ID};
use crate::{
    client::{
        api,
        components::{
            Button, ButtonVariant, ErrorPanel, Loading, Page, PageHeader, StatCard, StatIcon,
        },
        store::toast::ToastState,
        util::{copy_to_clipboard, LoadState},
    },
    model::{
        affiliate::{AffiliateStatsDto, ReferralLinkDto, TOP_PERFORMER_LIMIT},
        format,
        wallet::check_payout,
    },
};

#[derive(Clone, Debug, PartialEq)]
struct Overview {
    stats: AffiliateStatsDto,
    link: ReferralLinkDto,
    top: Vec<Affiliate>,
}

async fn load_overview() -> Result<Overview, String> {
    let stats = api::affiliate::get_affiliate_stats(CURRENT_AFFILIATE_ID).await?;
    let link = api::affiliate::get_referral_link(CURRENT_AFFILIATE_ID).await?;
    let top = api::affiliate::get_top_performers(TOP_PERFORMER_LIMIT).await?;

    Ok(Overview { stats, link, top })
}

#[component]
pub fn AffiliateDashboard() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut overview = use_signal(|| None::<Overview>);
    let mut state = use_signal(LoadState::default);
    let mut requesting = use_signal(|| false);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match load_overview().await {
            Ok(loaded) => {
                overview.set(Some(loaded));
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load affiliate overview: {}", err);
                state.set(LoadState::Failed("Failed to load affiliate data".to_string()));
            }
        }
    });

    let copy_link = move |_: MouseEvent| {
        let Some(link) = overview.read().as_ref().map(|o| o.link.link.clone()) else {
            return;
        };

        spawn(async move {
            match copy_to_clipboard(&link).await {
                Ok(()) => {
                    toasts.write().success("Referral link copied to clipboard");
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    toasts.write().error("Failed to copy link");
                }
            }
        });
    };

    let request_payout = move |_: MouseEvent| {
        let amount = overview
            .read()
            .as_ref()
            .map(|o| o.stats.pending_commissions)
            .unwrap_or_default();
        if let Err(rejection) = check_payout(amount, amount) {
            toasts.write().error(rejection.message());
            return;
        }
        requesting.set(true);

        spawn(async move {
            match api::affiliate::create_payout(CURRENT_AFFILIATE_ID, amount).await {
                Ok(payout) => {
                    toasts.write().success(format!(
                        "Payout of {} requested successfully",
                        format::currency(payout.amount)
                    ));
                    loader.restart();
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
            requesting.set(false);
        });
    };

    let body = match (state(), overview()) {
        (LoadState::Failed(message), _) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        (LoadState::Ready, Some(data)) => {
            let stats = data.stats;
            let referrals = stats.total_referrals.to_string();
            let conversion = format::percent(stats.conversion_rate);
            let total = format::currency(stats.total_commissions);
            let pending = format::currency(stats.pending_commissions);
            let converted_note = format!("{} converted", stats.converted_referrals);

            rsx!(
                div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
                    StatCard {
                        title: "Total Referrals",
                        value: referrals,
                        icon: StatIcon::Referrals,
                        note: converted_note,
                    }
                    StatCard { title: "Conversion Rate", value: conversion, icon: StatIcon::Rate }
                    StatCard { title: "Total Commissions", value: total, icon: StatIcon::Revenue }
                    StatCard {
                        title: "Pending Commissions",
                        value: pending.clone(),
                        icon: StatIcon::Pending,
                    }
                }
                div { class: "grid gap-4 lg:grid-cols-2",
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body gap-4",
                            h3 { class: "card-title", "Your Referral Link" }
                            p { class: "text-sm text-base-content/60",
                                "Earn commission on every subscription this link brings in."
                            }
                            div { class: "join w-full",
                                input {
                                    class: "input join-item w-full",
                                    readonly: true,
                                    value: "{data.link.link}",
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn-primary join-item",
                                    onclick: copy_link,
                                    Icon { width: 14, height: 14, icon: FaCopy }
                                    "Copy"
                                }
                            }
                            p { class: "text-sm",
                                "Referral code: "
                                span { class: "font-mono font-semibold",
                                    "{data.link.referral_code}"
                                }
                            }
                            div { class: "divider my-0" }
                            div { class: "flex items-center justify-between",
                                div {
                                    p { class: "text-sm text-base-content/60",
                                        "Available for payout"
                                    }
                                    p { class: "text-xl font-semibold", "{pending}" }
                                }
                                Button {
                                    variant: ButtonVariant::Success,
                                    loading: requesting(),
                                    onclick: request_payout,
                                    "Request Payout"
                                }
                            }
                        }
                    }
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body",
                            h3 { class: "card-title flex gap-2",
                                Icon { width: 16, height: 16, icon: FaTrophy }
                                "Top Performers"
                            }
                            ol { class: "flex flex-col gap-2",
                                for (rank, affiliate) in data.top.into_iter().enumerate() {
                                    {
                                        let position = rank + 1;
                                        let summary = format!(
                                            "{} · {} referrals",
                                            format::currency(affiliate.total_earnings),
                                            affiliate.total_referrals
                                        );
                                        rsx!(
                                            li {
                                                key: "{affiliate.id}",
                                                class: "flex items-center justify-between",
                                                span { class: "flex gap-3",
                                                    span { class: "badge badge-ghost",
                                                        "#{position}"
                                                    }
                                                    "{affiliate.name}"
                                                }
                                                span { class: "text-sm text-base-content/60",
                                                    "{summary}"
                                                }
                                            }
                                        )
                                    }
                                }
                            }
                        }
                    }
                }
            )
        }
        _ => rsx!(Loading { cards: 4 }),
    };

    rsx!(
        Title { "Affiliate Program | InfluenceHub" }
        Meta {
            name: "description",
            content: "Referral link, commissions and payouts of the affiliate program."
        }
        Page {
            PageHeader {
                title: "Affiliate Program",
                subtitle: "Earn commission by referring new users".to_string(),
            }
            AffiliateNav {}
            {body}
        }
    )
}
