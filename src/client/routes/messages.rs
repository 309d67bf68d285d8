use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaComments, FaPaperPlane};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use entity::prelude::{Conversation, Message};

use crate::client::{
    api,
    components::{Empty, ErrorPanel, Page, PageHeader},
    store::toast::ToastState,
    util::LoadState,
};

/// Conversations whose partner name contains `search`, case-insensitive.
pub fn filter_conversations(conversations: &[Conversation], search: &str) -> Vec<Conversation> {
    let needle = search.trim().to_lowercase();

    conversations
        .iter()
        .filter(|conversation| {
            needle.is_empty() || conversation.partner_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn MessagingCenter() -> Element {
    let mut toasts = use_context::<Store<ToastState>>();

    let mut conversations = use_signal(Vec::<Conversation>::new);
    let mut state = use_signal(LoadState::default);
    let mut search = use_signal(String::new);

    let mut selected = use_signal(|| None::<i32>);
    let mut messages = use_signal(Vec::<Message>::new);
    let mut thread_loading = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let mut loader = use_future(move || async move {
        state.set(LoadState::Loading);

        match api::message::get_conversations().await {
            Ok(page) => {
                conversations.set(page.items);
                state.set(LoadState::Ready);
            }
            Err(err) => {
                tracing::warn!("Failed to load conversations: {}", err);
                state.set(LoadState::Failed("Failed to load conversations".to_string()));
            }
        }
    });

    let mut open_conversation = move |id: i32| {
        selected.set(Some(id));
        thread_loading.set(true);

        spawn(async move {
            match api::message::get_messages(id).await {
                Ok(page) => messages.set(page.items),
                Err(err) => {
                    messages.set(Vec::new());
                    toasts.write().error(err);
                }
            }
            thread_loading.set(false);

            let unread = conversations
                .read()
                .iter()
                .any(|c| c.id == id && c.unread_count > 0);
            if unread {
                match api::message::mark_as_read(id).await {
                    Ok(updated) => {
                        if let Some(conversation) =
                            conversations.write().iter_mut().find(|c| c.id == id)
                        {
                            *conversation = updated;
                        }
                    }
                    Err(err) => tracing::warn!("Failed to mark conversation {} read: {}", id, err),
                }
            }
        });
    };

    let mut send = move || {
        let Some(id) = selected() else {
            return;
        };
        let text = draft().trim().to_string();
        if text.is_empty() || sending() {
            return;
        }
        sending.set(true);

        spawn(async move {
            match api::message::send_message(id, text).await {
                Ok(message) => {
                    if let Some(conversation) =
                        conversations.write().iter_mut().find(|c| c.id == id)
                    {
                        conversation.last_message = message.text.clone();
                        conversation.last_message_time = message.timestamp;
                    }
                    messages.write().push(message);
                    draft.set(String::new());
                }
                Err(err) => {
                    tracing::warn!("Failed to send message: {}", err);
                    toasts.write().error("Failed to send message");
                }
            }
            sending.set(false);
        });
    };

    let list = match state() {
        LoadState::Loading => rsx!(
            div { class: "flex flex-col gap-2 p-2",
                for index in 0..5 {
                    div { key: "{index}", class: "skeleton h-16 w-full" }
                }
            }
        ),
        LoadState::Failed(message) => rsx!(ErrorPanel {
            message: message,
            onretry: move |_| loader.restart(),
        }),
        LoadState::Ready => {
            let visible = filter_conversations(&conversations.read(), &search());

            rsx!(
                if visible.is_empty() {
                    p { class: "p-4 text-sm text-base-content/60",
                        "No conversations found"
                    }
                }
                ul { class: "menu w-full gap-1",
                    for conversation in visible {
                        {
                            let id = conversation.id;
                            let active = if selected() == Some(id) { "menu-active" } else { "" };
                            let time = conversation.last_message_time.format("%b %d").to_string();
                            let presence = if conversation.is_online {
                                "avatar avatar-online avatar-placeholder"
                            } else {
                                "avatar avatar-offline avatar-placeholder"
                            };
                            let initial = conversation.partner_name.chars().next().unwrap_or('?');
                            let unread = conversation.unread_count;

                            rsx!(
                                li { key: "{id}",
                                    a {
                                        class: "flex gap-3 {active}",
                                        onclick: move |_| open_conversation(id),
                                        div { class: presence,
                                            div {
                                                class: "w-10 rounded-full",
                                                class: "bg-neutral text-neutral-content",
                                                span { "{initial}" }
                                            }
                                        }
                                        div { class: "flex-1 min-w-0",
                                            div { class: "flex justify-between",
                                                span { class: "font-medium truncate",
                                                    "{conversation.partner_name}"
                                                }
                                                span { class: "text-xs text-base-content/50",
                                                    "{time}"
                                                }
                                            }
                                            p { class: "text-sm text-base-content/60 truncate",
                                                "{conversation.last_message}"
                                            }
                                        }
                                        if unread > 0 {
                                            span { class: "badge badge-primary badge-sm",
                                                "{unread}"
                                            }
                                        }
                                    }
                                }
                            )
                        }
                    }
                }
            )
        }
    };

    let partner = selected().and_then(|id| {
        conversations
            .read()
            .iter()
            .find(|c| c.id == id)
            .map(|c| (c.partner_name.clone(), c.is_online))
    });

    let thread = match partner {
        None => rsx!(
            Empty {
                title: "Select a conversation",
                message: "Choose a conversation from the list to start messaging.",
            }
        ),
        Some((name, online)) => {
            let status = if online { "Online" } else { "Offline" };

            rsx!(
                div { class: "flex items-center gap-3 border-b border-base-300 p-4",
                    h3 { class: "font-semibold", "{name}" }
                    span { class: "text-xs text-base-content/60", "{status}" }
                }
                div { class: "flex-1 overflow-y-auto p-4 flex flex-col gap-2",
                    if thread_loading() {
                        span { class: "loading loading-dots loading-md self-center" }
                    } else {
                        for message in messages() {
                            {
                                let side = if message.is_own {
                                    "chat chat-end"
                                } else {
                                    "chat chat-start"
                                };
                                let bubble = if message.is_own {
                                    "chat-bubble chat-bubble-primary"
                                } else {
                                    "chat-bubble"
                                };
                                let time = message.timestamp.format("%H:%M").to_string();

                                rsx!(
                                    div { key: "{message.id}", class: side,
                                        div { class: bubble, "{message.text}" }
                                        div { class: "chat-footer opacity-50 text-xs", "{time}" }
                                    }
                                )
                            }
                        }
                    }
                }
                div { class: "flex gap-2 border-t border-base-300 p-4",
                    input {
                        class: "input w-full",
                        placeholder: "Type a message...",
                        value: draft(),
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary btn-square",
                        disabled: sending() || draft().trim().is_empty(),
                        onclick: move |_| send(),
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                    }
                }
            )
        }
    };

    rsx!(
        Title { "Messages | InfluenceHub" }
        Meta {
            name: "description",
            content: "Chat with stores and creators about your campaigns."
        }
        Page {
            PageHeader {
                title: "Messages",
                subtitle: "Communicate with influencers and brands".to_string(),
            }
            div { class: "card bg-base-100 shadow-sm grid md:grid-cols-[320px_1fr] min-h-[600px]",
                div { class: "border-r border-base-300 flex flex-col",
                    div { class: "p-3 flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaComments }
                        input {
                            class: "input input-sm w-full",
                            placeholder: "Search conversations...",
                            value: search(),
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    {list}
                }
                div { class: "flex flex-col",
                    {thread}
                }
            }
        }
    )
}
