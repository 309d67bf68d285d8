mod deposit;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowDown, FaArrowUp, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::{Wallet, WalletTransaction};

use crate::{
    client::{
        api,
        components::{
            Badge, BadgeVariant, Button, ButtonVariant, Empty, ErrorPanel, Loading, Page,
            PageHeader, StatCard, StatIcon,
        },
        store::toast::ToastState,
        util::LoadState,
    },
    model::{format, wallet::check_payout},
};

use deposit::DepositModal;

/// Signed amount for the history table, e.g. `-$120.00` for a payout.
pub fn signed_amount(transaction: &WalletTransaction) -> String {
    let sign = if transaction.kind.is_debit() { "-" } else { "+" };
    format!("{}{}", sign, format::currency(transaction.amount))
}

#[component]
pub fn WalletPage() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut wallet = use_signal(Wallet::default);
    let mut transactions = use_signal(Vec::<WalletTransaction>::new);
    let mut state = use_signal(LoadState::default);
    let mut requesting = use_signal(|| false);
    let mut depositing = use_signal(|| false);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        let result = async {
            let balance = api::wallet::get_wallet().await?;
            let history = api::wallet::get_transactions().await?;
            Ok::<_, String>((balance, history))
        }
        .await;

        match result {
            Ok((balance, history)) => {
                wallet.set(balance);
                transactions.set(history);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load wallet: {}", err);
                state.set(LoadState::Failed("Failed to load wallet data".to_string()));
            }
        }
    });

    let request_payout = move |_: MouseEvent| {
        let amount = wallet.read().available_balance;
        if let Err(rejection) = check_payout(amount, amount) {
            toasts.write().error(rejection.message());
            return;
        }
        requesting.set(true);

        spawn(async move {
            match api::wallet::request_payout(amount).await {
                Ok(transaction) => {
                    {
                        let mut balance = wallet.write();
                        balance.available_balance -= amount;
                        balance.total_paid_out += amount;
                    }
                    transactions.write().insert(0, transaction);
                    toasts.write().success(format!(
                        "Payout of {} requested successfully",
                        format::currency(amount)
                    ));
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
            requesting.set(false);
        });
    };

    let on_deposited = move |transaction: WalletTransaction| {
        {
            let mut balance = wallet.write();
            balance.available_balance += transaction.amount;
        }
        toasts.write().success(format!(
            "Successfully deposited {}",
            format::currency(transaction.amount)
        ));
        transactions.write().insert(0, transaction);
        depositing.set(false);
    };

    let body = match state() {
        LoadState::Loading => rsx!(Loading { cards: 4 }),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => {
            let balance = wallet();
            let available = format::currency(balance.available_balance);
            let pending = format::currency(balance.pending_balance);
            let earned = format::currency(balance.total_earned);
            let paid_out = format::currency(balance.total_paid_out);
            let history = transactions();

            rsx!(
                div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
                    StatCard {
                        title: "Available Balance",
                        value: available,
                        icon: StatIcon::Wallet,
                    }
                    StatCard { title: "Pending Earnings", value: pending, icon: StatIcon::Pending }
                    StatCard { title: "Total Earned", value: earned, icon: StatIcon::Trend }
                    StatCard { title: "Total Paid Out", value: paid_out, icon: StatIcon::Completed }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "card-title", "Transaction History" }
                        if history.is_empty() {
                            Empty {
                                title: "No transactions yet",
                                message: "Earnings, payouts and deposits will show up here.",
                            }
                        } else {
                            div { class: "overflow-x-auto",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Description" }
                                            th { "Campaign" }
                                            th { "Date" }
                                            th { "Status" }
                                            th { class: "text-right", "Amount" }
                                        }
                                    }
                                    tbody {
                                        for transaction in history {
                                            TransactionRow {
                                                key: "{transaction.id}",
                                                transaction: transaction,
                                            }
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

    rsx!(
        Title { "Wallet | InfluenceHub" }
        Meta {
            name: "description",
            content: "Balances, payouts and deposits."
        }
        Page {
            PageHeader {
                title: "Wallet",
                subtitle: "Manage your earnings and payouts".to_string(),
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| depositing.set(true),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Add Funds"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        loading: requesting(),
                        onclick: request_payout,
                        "Request Payout"
                    }
                }
            }
            {body}
        }
        if depositing() {
            DepositModal {
                onclose: move |_| depositing.set(false),
                ondeposited: on_deposited,
            }
        }
    )
}

#[component]
fn TransactionRow(transaction: WalletTransaction) -> Element {
    let amount = signed_amount(&transaction);
    let amount_class = if transaction.kind.is_debit() {
        "text-right font-semibold text-error"
    } else {
        "text-right font-semibold text-success"
    };
    let date = transaction.timestamp.format("%b %d, %Y").to_string();
    let status = format!("{:?}", transaction.status);

    rsx!(
        tr {
            td {
                div { class: "flex items-center gap-2",
                    if transaction.kind.is_debit() {
                        Icon { width: 12, height: 12, icon: FaArrowUp }
                    } else {
                        Icon { width: 12, height: 12, icon: FaArrowDown }
                    }
                    "{transaction.description}"
                }
            }
            td { "{transaction.campaign_name}" }
            td { "{date}" }
            td {
                Badge {
                    variant: BadgeVariant::for_transaction(transaction.status),
                    small: true,
                    "{status}"
                }
            }
            td { class: amount_class, "{amount}" }
        }
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use entity::prelude::{TransactionStatus, TransactionType};

    use super::*;

    fn transaction(kind: TransactionType, amount: f64) -> WalletTransaction {
        WalletTransaction {
            id: 1,
            kind,
            amount,
            description: String::new(),
            campaign_name: String::new(),
            status: TransactionStatus::Completed,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn payouts_are_shown_as_debits() {
        assert_eq!(signed_amount(&transaction(TransactionType::Payout, 120.0)), "-$120.00");
        assert_eq!(signed_amount(&transaction(TransactionType::Earning, 1500.5)), "+$1,500.50");
    }
}
