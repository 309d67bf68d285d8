use entity::prelude::{Conversation, Message};

use super::Method;
use crate::model::{message::SendMessageDto, page::Page};

pub async fn get_conversations() -> Result<Page<Conversation>, String> {
    super::get("/api/conversations").await
}

pub async fn get_messages(conversation_id: i32) -> Result<Page<Message>, String> {
    super::get(&format!("/api/conversations/{}/messages", conversation_id)).await
}

pub async fn send_message(conversation_id: i32, text: String) -> Result<Message, String> {
    super::send(
        Method::Post,
        &format!("/api/conversations/{}/messages", conversation_id),
        &SendMessageDto { text },
    )
    .await
}

pub async fn mark_as_read(conversation_id: i32) -> Result<Conversation, String> {
    super::call(
        Method::Post,
        &format!("/api/conversations/{}/read", conversation_id),
    )
    .await
}
