//! Deposit dialog backed by the PayPal JavaScript SDK.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::WalletTransaction;
use serde::Deserialize;

use crate::{
    client::{
        api,
        components::{Button, ButtonVariant, Input},
        store::{session::SessionState, toast::ToastState},
    },
    model::wallet::{DEFAULT_DEPOSIT_METHOD, INVALID_DEPOSIT_MESSAGE},
};

const PAYPAL_CONTAINER_ID: &str = "paypal-button-container";

/// Loads the SDK once per page, renders the buttons into the container and reports the
/// outcome of the checkout through `dioxus.send`.
const PAYPAL_SCRIPT: &str = r##"
const clientId = __CLIENT_ID__;
const amount = __AMOUNT__;
if (!window.paypal) {
    await new Promise((resolve, reject) => {
        const script = document.createElement("script");
        script.src = "https://www.paypal.com/sdk/js?client-id=" + clientId
            + "&currency=USD&components=buttons";
        script.onload = resolve;
        script.onerror = () => reject(new Error("Failed to load PayPal SDK"));
        document.head.appendChild(script);
    });
}
window.paypal.Buttons({
    style: { layout: "vertical", color: "blue", shape: "rect", label: "paypal" },
    createOrder: (data, actions) => actions.order.create({
        purchase_units: [{ amount: { value: amount.toFixed(2) }, description: "Wallet Deposit" }]
    }),
    onApprove: async (data, actions) => {
        const order = await actions.order.capture();
        const captured = parseFloat(order.purchase_units[0].amount.value);
        dioxus.send({ approved: true, amount: captured, error: null });
    },
    onError: (err) => dioxus.send({ approved: false, amount: 0, error: String(err) }),
}).render("#__CONTAINER__");
"##;

#[derive(Debug, Deserialize)]
struct CheckoutOutcome {
    approved: bool,
    amount: f64,
    error: Option<String>,
}

/// JavaScript that renders PayPal buttons charging `amount` dollars.
pub fn paypal_script(client_id: &str, amount: f64) -> Result<String, String> {
    let client_id = serde_json::to_string(client_id).map_err(|e| e.to_string())?;

    Ok(PAYPAL_SCRIPT
        .replace("__CLIENT_ID__", &client_id)
        .replace("__AMOUNT__", &amount.to_string())
        .replace("__CONTAINER__", PAYPAL_CONTAINER_ID))
}

/// Positive deposit amount typed into the dialog.
pub fn parse_deposit(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[component]
pub fn DepositModal(
    onclose: EventHandler<()>,
    ondeposited: EventHandler<WalletTransaction>,
) -> Element {
    let session = use_context::<Store<SessionState>>();
    let mut toasts = use_context::<Store<ToastState>>();
    let client_id = session.read().paypal_client_id().map(str::to_string);

    let mut amount = use_signal(String::new);
    let mut checkout = use_signal(|| None::<f64>);

    let start_checkout = move |_: MouseEvent| match parse_deposit(&amount()) {
        Some(value) => checkout.set(Some(value)),
        None => {
            toasts.write().error(INVALID_DEPOSIT_MESSAGE);
        }
    };

    let content = match (client_id, checkout()) {
        (None, _) => rsx!(
            div { role: "alert", class: "alert alert-warning",
                "PayPal is not configured for this deployment."
            }
        ),
        (Some(_), None) => rsx!(
            Input {
                label: "Amount (USD)".to_string(),
                value: amount(),
                input_type: "number",
                placeholder: "100.00".to_string(),
                oninput: move |value| amount.set(value),
            }
            div { class: "flex justify-end mt-4",
                Button {
                    disabled: parse_deposit(&amount()).is_none(),
                    onclick: start_checkout,
                    "Continue to PayPal"
                }
            }
        ),
        (Some(client_id), Some(value)) => rsx!(
            PayPalButtons {
                client_id: client_id,
                amount: value,
                ondeposited: ondeposited,
                oncancel: move |_| checkout.set(None),
            }
        ),
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Add Funds" }
                p { class: "text-sm text-base-content/70 py-2",
                    "All transactions are processed securely through PayPal. "
                    "Your payment information is never stored on our servers."
                }
                {content}
                div { class: "modal-action",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| onclose.call(()),
                        "Close"
                    }
                }
            }
        }
    )
}

#[component]
fn PayPalButtons(
    client_id: String,
    amount: f64,
    ondeposited: EventHandler<WalletTransaction>,
    oncancel: EventHandler<()>,
) -> Element {
    let mut toasts = use_context::<Store<ToastState>>();
    let mut processing = use_signal(|| false);

    use_future(move || {
        let client_id = client_id.clone();
        async move {
            let script = match paypal_script(&client_id, amount) {
                Ok(script) => script,
                Err(err) => {
                    tracing::error!("Failed to build PayPal script: {}", err);
                    return;
                }
            };
            let mut eval = document::eval(&script);

            match eval.recv::<CheckoutOutcome>().await {
                Ok(outcome) if outcome.approved => {
                    processing.set(true);
                    let method = Some(DEFAULT_DEPOSIT_METHOD.to_string());
                    match api::wallet::add_deposit(outcome.amount, method).await {
                        Ok(transaction) => ondeposited.call(transaction),
                        Err(err) => {
                            tracing::warn!("Deposit failed after PayPal approval: {}", err);
                            toasts.write().error("Failed to process deposit");
                        }
                    }
                    processing.set(false);
                }
                Ok(outcome) => {
                    tracing::warn!("PayPal checkout error: {:?}", outcome.error);
                    toasts.write().error("PayPal payment error");
                }
                Err(err) => {
                    tracing::warn!("PayPal SDK unavailable: {}", err);
                    toasts.write().error("Failed to load PayPal SDK");
                }
            }
        }
    });

    rsx!(
        if processing() {
            div { class: "flex items-center gap-2 py-4",
                span { class: "loading loading-spinner loading-md" }
                "Processing deposit..."
            }
        }
        div { id: PAYPAL_CONTAINER_ID, class: "mt-4" }
        button {
            r#type: "button",
            class: "btn btn-link btn-sm",
            onclick: move |_| oncancel.call(()),
            "Change amount"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_amount_must_be_positive() {
        assert_eq!(parse_deposit(" 25.5 "), Some(25.5));
        assert_eq!(parse_deposit("0"), None);
        assert_eq!(parse_deposit("-10"), None);
        assert_eq!(parse_deposit("ten"), None);
    }

    #[test]
    fn script_embeds_quoted_client_id_and_amount() {
        let script = paypal_script("abc\"123", 40.0).unwrap();

        assert!(script.contains(r#"const clientId = "abc\"123";"#));
        assert!(script.contains("const amount = 40;"));
        assert!(script.contains("#paypal-button-container"));
        assert!(!script.contains("__"));
    }
}
