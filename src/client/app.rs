use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::ToastHost,
    router::Route,
    store::{session::SessionState, toast::ToastState},
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut session = use_store(SessionState::default);
    let toasts = use_store(ToastState::default);

    use_context_provider(|| session);
    use_context_provider(|| toasts);

    // PayPal client id and other public settings, fetched once per visit
    use_future(move || async move {
        match api::config::get_client_config().await {
            Ok(config) => session.write().config = config,
            Err(err) => tracing::warn!("Failed to load client configuration: {}", err),
        }
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }

        Router::<Route> {}
        ToastHost {}
    }
}
