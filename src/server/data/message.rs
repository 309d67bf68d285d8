use chrono::{DateTime, Utc};
use entity::prelude::{Conversation, Message};

use crate::{model::message::CURRENT_USER_ID, server::data::{table::next_id, MemoryDb}};

pub struct ConversationRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> ConversationRepository<'a> {
    /// Creates a new instance of [`ConversationRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Vec<Conversation> {
        self.db.conversations.all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Conversation> {
        self.db.conversations.find(id).await
    }

    /// Set each conversation partner's presence from `is_online(partner_id)`
    pub async fn set_presence<F>(&self, mut is_online: F) -> usize
    where
        F: FnMut(i32) -> bool,
    {
        let mut conversations = self.db.conversations.write().await;

        for conversation in conversations.iter_mut() {
            conversation.is_online = is_online(conversation.partner_id);
        }

        conversations.iter().filter(|c| c.is_online).count()
    }
}

pub struct MessageRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    /// Messages of a conversation, oldest first
    pub async fn get_by_conversation(&self, conversation_id: i32) -> Vec<Message> {
        let mut messages = self
            .db
            .messages
            .filter(|message| message.conversation_id == conversation_id)
            .await;
        messages.sort_by_key(|message| message.timestamp);

        messages
    }

    /// Stores an own message and moves it to the top of its conversation
    ///
    /// Returns `None` without storing anything when the conversation does not exist.
    pub async fn send(
        &self,
        conversation_id: i32,
        text: String,
        now: DateTime<Utc>,
    ) -> Option<Message> {
        let mut conversations = self.db.conversations.write().await;
        let conversation = conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)?;

        let mut messages = self.db.messages.write().await;
        let message = Message {
            id: next_id(&messages),
            conversation_id,
            sender_id: CURRENT_USER_ID.to_string(),
            text,
            timestamp: now,
            is_own: true,
            read: true,
        };
        messages.push(message.clone());

        conversation.last_message = message.text.clone();
        conversation.last_message_time = now;

        Some(message)
    }

    /// Clears the unread counter and marks every partner message read
    ///
    /// Returns `None` when the conversation does not exist.
    pub async fn mark_as_read(&self, conversation_id: i32) -> Option<Conversation> {
        let mut conversations = self.db.conversations.write().await;
        let conversation = conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)?;
        conversation.unread_count = 0;

        let mut messages = self.db.messages.write().await;
        for message in messages
            .iter_mut()
            .filter(|message| message.conversation_id == conversation_id && !message.is_own)
        {
            message.read = true;
        }

        Some(conversation.clone())
    }
}
