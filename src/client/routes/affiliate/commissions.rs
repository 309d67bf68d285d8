use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::{Commission, CommissionStatus, Payout, PayoutStatus};

use super::{AffiliateNav, CURRENT_AFFILIATE_ID};
use crate::{
    client::{
        api,
        components::{Badge, BadgeVariant, Empty, ErrorPanel, Loading, Page, PageHeader},
        util::LoadState,
    },
    model::{affiliate::CommissionFilter, format},
};

const STATUSES: [CommissionStatus; 3] = [
    CommissionStatus::Pending,
    CommissionStatus::Processing,
    CommissionStatus::Paid,
];

fn payout_badge(status: PayoutStatus) -> (BadgeVariant, &'static str) {
    match status {
        PayoutStatus::Pending => (BadgeVariant::Warning, "pending"),
        PayoutStatus::Completed => (BadgeVariant::Success, "completed"),
        PayoutStatus::Failed => (BadgeVariant::Error, "failed"),
    }
}

#[component]
pub fn AffiliateCommissions() -> Element {
    let mut commissions = use_signal(Vec::<Commission>::new);
    let mut payouts = use_signal(Vec::<Payout>::new);
    let mut state = use_signal(LoadState::default);
    let mut filter = use_signal(CommissionFilter::default);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        let result = async {
            let earned = api::affiliate::get_affiliate_commissions(CURRENT_AFFILIATE_ID).await?;
            let paid = api::affiliate::get_affiliate_payouts(CURRENT_AFFILIATE_ID).await?;
            Ok::<_, String>((earned, paid))
        }
        .await;

        match result {
            Ok((earned, paid)) => {
                commissions.set(earned);
                payouts.set(paid);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load commissions: {}", err);
                state.set(LoadState::Failed("Failed to load commissions".to_string()));
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
            let visible = filter.read().apply(&commissions.read());
            let history = payouts();

            rsx!(
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "card-title", "Commissions" }
                        if visible.is_empty() {
                            Empty {
                                title: "No commissions found",
                                message: "Try a different search or status filter.",
                            }
                        } else {
                            div { class: "overflow-x-auto",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Customer" }
                                            th { "Plan" }
                                            th { "Date" }
                                            th { "Status" }
                                            th { class: "text-right", "Amount" }
                                        }
                                    }
                                    tbody {
                                        for commission in visible {
                                            CommissionRow {
                                                key: "{commission.id}",
                                                commission: commission,
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "card-title", "Payout History" }
                        if history.is_empty() {
                            p { class: "text-sm text-base-content/60", "No payouts yet" }
                        } else {
                            div { class: "overflow-x-auto",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Date" }
                                            th { "Method" }
                                            th { "Transaction" }
                                            th { "Commissions" }
                                            th { "Status" }
                                            th { class: "text-right", "Amount" }
                                        }
                                    }
                                    tbody {
                                        for payout in history {
                                            PayoutRow { key: "{payout.id}", payout: payout }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            )
        }
    };

    let search = filter.read().search.clone();
    let status_value = filter.read().status.map(|s| s.as_str()).unwrap_or("");

    rsx!(
        Title { "Commissions | InfluenceHub" }
        Meta {
            name: "description",
            content: "Commission earnings and payout history."
        }
        Page {
            PageHeader {
                title: "Commissions",
                subtitle: "Earnings from your referrals and past payouts".to_string(),
            }
            AffiliateNav {}
            div { class: "flex flex-col gap-2 sm:flex-row",
                input {
                    class: "input w-full",
                    placeholder: "Search by customer or plan...",
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
            {body}
        }
    )
}

#[component]
fn CommissionRow(commission: Commission) -> Element {
    let date = commission.date.format("%b %d, %Y").to_string();
    let plan = commission
        .subscription_plan
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let status = commission.status.as_str();
    let amount = format::currency(commission.amount);

    rsx!(
        tr {
            td { "{commission.customer_name}" }
            td { "{plan}" }
            td { "{date}" }
            td {
                Badge {
                    variant: BadgeVariant::for_commission(commission.status),
                    small: true,
                    "{status}"
                }
            }
            td { class: "text-right", "{amount}" }
        }
    )
}

#[component]
fn PayoutRow(payout: Payout) -> Element {
    let date = payout.date.format("%b %d, %Y").to_string();
    let amount = format::currency(payout.amount);
    let (variant, label) = payout_badge(payout.status);

    rsx!(
        tr {
            td { "{date}" }
            td { "{payout.method}" }
            td { class: "font-mono text-xs", "{payout.transaction_id}" }
            td { "{payout.commissions_included}" }
            td {
                Badge { variant: variant, small: true, "{label}" }
            }
            td { class: "text-right", "{amount}" }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_badges_follow_status() {
        assert_eq!(
            payout_badge(PayoutStatus::Completed),
            (BadgeVariant::Success, "completed")
        );
        assert_eq!(payout_badge(PayoutStatus::Failed).0, BadgeVariant::Error);
    }
}
