use serde::{Deserialize, Serialize};

/// Default size of a conversation list page.
pub const CONVERSATION_PAGE_LIMIT: usize = 20;

/// Default size of a message thread page.
pub const MESSAGE_PAGE_LIMIT: usize = 50;

/// Sender id recorded on messages written by the signed in user.
pub const CURRENT_USER_ID: &str = "current_user";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SendMessageDto {
    pub text: String,
}
