//! Messaging service.
//!
//! Conversations between the signed in user and brand or influencer partners. Message pages
//! are cached per conversation without expiry and dropped whenever a message is sent to that
//! conversation. Partner presence is simulated and refreshed by the scheduler.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::prelude::{Conversation, Message};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    model::{
        message::{CONVERSATION_PAGE_LIMIT, MESSAGE_PAGE_LIMIT},
        page::{Page, PageQuery},
    },
    server::{
        data::message::{ConversationRepository, MessageRepository},
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::app::AppState,
        service::{cache::cache_key, latency::Latency},
    },
};

/// Chance of a conversation partner showing as online after a presence refresh.
pub const ONLINE_PROBABILITY: f64 = 0.7;

pub struct MessageService<'a> {
    state: &'a AppState,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Retrieves one page of conversations, most recent activity first.
    ///
    /// Each conversation carries its partner's simulated presence and its unread count.
    pub async fn get_conversations(&self, query: PageQuery) -> Result<Page<Conversation>, Error> {
        Latency::List.simulate(&self.state.config).await;

        let mut conversations = ConversationRepository::new(&self.state.db).get_all().await;
        conversations.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));

        Ok(Page::slice(
            &conversations,
            query.page(),
            query.limit_or(CONVERSATION_PAGE_LIMIT),
        ))
    }

    /// Retrieves one page of a conversation's messages, oldest first.
    ///
    /// # Returns
    /// - `Ok(Page<Message>)` - Up to 50 messages unless another limit is given
    /// - `Err(Error::ResourceError)` - No conversation with that id
    pub async fn get_messages(
        &self,
        conversation_id: i32,
        query: PageQuery,
    ) -> Result<Page<Message>, Error> {
        let page = query.page();
        let limit = query.limit_or(MESSAGE_PAGE_LIMIT);
        let key = cache_key("messages", &[&conversation_id, &page, &limit]);

        let generation = {
            let messages = self.state.cache.messages.lock().await;
            if query.use_cache() {
                if let Some(cached) = messages.get(&key, Utc::now()) {
                    return Ok(cached);
                }
            }
            messages.generation()
        };

        Latency::Instant.simulate(&self.state.config).await;

        ConversationRepository::new(&self.state.db)
            .get_by_id(conversation_id)
            .await
            .ok_or(ResourceError::ConversationNotFound(conversation_id))?;

        let messages = MessageRepository::new(&self.state.db)
            .get_by_conversation(conversation_id)
            .await;
        let result = Page::slice(&messages, page, limit);

        self.state
            .cache
            .messages
            .lock()
            .await
            .insert_if_current(key, result.clone(), Utc::now(), generation);

        Ok(result)
    }

    /// Sends a message from the signed in user.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message, which is now the conversation's last message
    /// - `Err(Error::ValidationError)` - The text is blank
    /// - `Err(Error::ResourceError)` - No conversation with that id
    pub async fn send_message(&self, conversation_id: i32, text: &str) -> Result<Message, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let message = MessageRepository::new(&self.state.db)
            .send(conversation_id, text.to_string(), Utc::now())
            .await
            .ok_or(ResourceError::ConversationNotFound(conversation_id))?;

        self.state
            .cache
            .messages
            .lock()
            .await
            .invalidate_prefix(&format!("messages_{}_", conversation_id));

        Ok(message)
    }

    /// Clears a conversation's unread count and marks the partner's messages read.
    pub async fn mark_as_read(&self, conversation_id: i32) -> Result<Conversation, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        let conversation = MessageRepository::new(&self.state.db)
            .mark_as_read(conversation_id)
            .await
            .ok_or(ResourceError::ConversationNotFound(conversation_id))?;

        self.state
            .cache
            .messages
            .lock()
            .await
            .invalidate_prefix(&format!("messages_{}_", conversation_id));

        Ok(conversation)
    }

    /// Randomly brings conversation partners online or offline, returning how many are online.
    pub async fn refresh_presence(&self) -> usize {
        let mut rng = StdRng::from_os_rng();

        ConversationRepository::new(&self.state.db)
            .set_presence(|_| rng.random_bool(ONLINE_PROBABILITY))
            .await
    }
}
