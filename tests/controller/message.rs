use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Conversation, Message};
use influencehub::{
    model::{
        message::SendMessageDto,
        page::{Page, PageQuery},
    },
    server::controller::message::{get_conversations, get_messages, mark_as_read, send_message},
};

use super::*;

/// Expected: messages come back oldest first
#[tokio::test]
async fn get_messages_in_chronological_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_conversation(factory::conversation(1))
        .with_message(factory::message(1, 1, false, 30))
        .with_message(factory::message(2, 1, true, 10))
        .build()?;

    let resp = get_messages(State(app_state(&test)), Path(1), Query(PageQuery::default()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Message> = json_body(resp).await;

    let ids: Vec<i32> = page.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}

/// Expected: 201 Created and the conversation preview shows the new text
#[tokio::test]
async fn send_message_updates_conversation_preview() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_conversation(factory::conversation(1))
        .build()?;
    let state = app_state(&test);

    let resp = send_message(
        State(state.clone()),
        Path(1),
        Json(SendMessageDto {
            text: "Sounds great!".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let message: Message = json_body(resp).await;
    assert!(message.is_own);

    let resp = get_conversations(State(state), Query(PageQuery::default()))
        .await
        .unwrap()
        .into_response();
    let page: Page<Conversation> = json_body(resp).await;
    assert_eq!(page.items[0].last_message, "Sounds great!");

    Ok(())
}

/// Expected: 400 Bad Request for a blank message
#[tokio::test]
async fn send_blank_message_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_conversation(factory::conversation(1))
        .build()?;

    let result = send_message(
        State(app_state(&test)),
        Path(1),
        Json(SendMessageDto {
            text: "   ".to_string(),
        }),
    )
    .await;

    let resp = result.err().expect("blank message should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: unread count drops to zero
#[tokio::test]
async fn mark_as_read_clears_unread_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_conversation(Conversation {
            unread_count: 3,
            ..factory::conversation(1)
        })
        .with_message(factory::message(1, 1, false, 5))
        .build()?;

    let resp = mark_as_read(State(app_state(&test)), Path(1))
        .await
        .unwrap()
        .into_response();
    let conversation: Conversation = json_body(resp).await;
    assert_eq!(conversation.unread_count, 0);

    Ok(())
}
