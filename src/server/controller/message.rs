use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Conversation, Message};

use crate::{
    model::{
        api::ErrorDto,
        message::SendMessageDto,
        page::{Page, PageQuery},
    },
    server::{error::Error, model::app::AppState, service::message::MessageService},
};

pub static MESSAGE_TAG: &str = "message";

/// List conversations, most recent activity first
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = MESSAGE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of conversations", body = Page<Conversation>)
    ),
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = MessageService::new(&state).get_conversations(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// List the messages of a conversation, oldest first
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Conversation id"), PageQuery),
    responses(
        (status = 200, description = "Page of messages", body = Page<Message>),
        (status = 404, description = "Conversation not found", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = MessageService::new(&state).get_messages(id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Send a message to a conversation partner
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Sent message", body = Message),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(message): Json<SendMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let message = MessageService::new(&state)
        .send_message(id, &message.text)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Mark a conversation as read
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/read",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    responses(
        (status = 200, description = "Conversation with no unread messages", body = Conversation),
        (status = 404, description = "Conversation not found", body = ErrorDto)
    ),
)]
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let conversation = MessageService::new(&state).mark_as_read(id).await?;

    Ok((StatusCode::OK, Json(conversation)))
}
