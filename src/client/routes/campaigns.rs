use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::{Campaign, Niche};

use crate::{
    client::{
        api,
        components::{
            Button, ButtonVariant, CampaignCard, Empty, ErrorPanel, Loading, Page, PageHeader,
            SearchBar,
        },
        store::toast::ToastState,
        util::LoadState,
    },
    model::campaign::{CampaignQuery, CampaignSort},
};

/// Campaigns fetched per "Load more" click.
pub const CAMPAIGN_PAGE_SIZE: usize = 20;

#[component]
pub fn CampaignBrowser() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut campaigns = use_signal(Vec::<Campaign>::new);
    let mut page = use_signal(|| 1usize);
    let mut has_more = use_signal(|| false);
    let mut loading_more = use_signal(|| false);
    let mut state = use_signal(LoadState::default);
    let mut query = use_signal(CampaignQuery::default);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match api::campaign::get_campaigns(1, CAMPAIGN_PAGE_SIZE).await {
            Ok(first) => {
                page.set(1);
                has_more.set(first.has_more);
                campaigns.set(first.items);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load campaigns: {}", err);
                state.set(LoadState::Failed("Failed to load campaigns".to_string()));
            }
        }
    });

    let load_more = move |_: MouseEvent| {
        if loading_more() || !has_more() {
            return;
        }
        loading_more.set(true);

        spawn(async move {
            let next = page() + 1;
            match api::campaign::get_campaigns(next, CAMPAIGN_PAGE_SIZE).await {
                Ok(more) => {
                    page.set(next);
                    has_more.set(more.has_more);
                    campaigns.write().extend(more.items);
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
            loading_more.set(false);
        });
    };

    let update_status = move |id: i32, accept: bool| {
        spawn(async move {
            let result = if accept {
                api::campaign::accept_campaign(id).await
            } else {
                api::campaign::decline_campaign(id).await
            };

            match result {
                Ok(updated) => {
                    if let Some(campaign) = campaigns.write().iter_mut().find(|c| c.id == id) {
                        *campaign = updated;
                    }
                    toasts.write().success(if accept {
                        "Campaign accepted successfully!"
                    } else {
                        "Campaign declined"
                    });
                }
                Err(err) => {
                    toasts.write().error(err);
                }
            }
        });
    };

    let niche_labels: Vec<String> = Niche::ALL.iter().map(|n| n.to_string()).collect();
    let active_labels: Vec<String> = query.read().niches.iter().map(|n| n.to_string()).collect();
    let search = query.read().search.clone();
    let sort = query.read().sort;
    let visible = query.read().apply(&campaigns.read());
    let loaded = campaigns.read().len();
    let visible_count = visible.len();

    let body = match state() {
        LoadState::Loading => rsx!(Loading {}),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => rsx!(
            p { class: "text-sm text-base-content/60",
                "Showing {visible_count} of {loaded} loaded campaigns"
            }
            if visible.is_empty() {
                Empty {
                    title: "No campaigns found",
                    message: "Try a different search or clear the niche filters.",
                    action_label: "Clear filters".to_string(),
                    onaction: move |_| query.set(CampaignQuery::default()),
                }
            } else {
                div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                    for campaign in visible {
                        CampaignCard {
                            key: "{campaign.id}",
                            campaign: campaign,
                            onaccept: move |id| update_status(id, true),
                            ondecline: move |id| update_status(id, false),
                        }
                    }
                }
            }
            if has_more() {
                div { class: "flex justify-center",
                    Button {
                        variant: ButtonVariant::Outline,
                        loading: loading_more(),
                        onclick: load_more,
                        "Load more"
                    }
                }
            }
        ),
    };

    rsx!(
        Title { "Campaigns | InfluenceHub" }
        Meta {
            name: "description",
            content: "Browse and respond to campaign offers."
        }
        Page {
            PageHeader {
                title: "Browse Campaigns",
                subtitle: "Find collaborations that fit your audience".to_string(),
                select {
                    class: "select select-bordered",
                    value: sort.as_str(),
                    onchange: move |evt| {
                        if let Some(sort) = CampaignSort::parse(&evt.value()) {
                            query.write().sort = sort;
                        }
                    },
                    for choice in CampaignSort::ALL {
                        {
                            let value = choice.as_str();
                            let label = choice.label();
                            rsx!(
                                option { key: "{value}", value: value, "{label}" }
                            )
                        }
                    }
                }
            }
            SearchBar {
                value: search,
                placeholder: "Search by product, store or description".to_string(),
                oninput: move |value| query.write().search = value,
                filters: niche_labels,
                active: active_labels,
                ontoggle: move |label: String| {
                    if let Some(niche) = Niche::parse(&label) {
                        query.write().toggle_niche(niche);
                    }
                },
            }
            {body}
        }
    )
}
