mod get_conversations;
mod mark_as_read;
mod send_message;

use influencehub_test_utils::prelude::*;

use super::*;

/// Two conversations, the second one more recent, with messages stored out of order
fn inbox() -> TestBuilder {
    TestBuilder::new()
        .with_conversation(factory::conversation(1))
        .with_conversation(Conversation {
            unread_count: 2,
            ..factory::conversation(2)
        })
        .with_message(factory::message(1, 2, false, 30))
        .with_message(factory::message(2, 2, true, 10))
        .with_message(factory::message(3, 2, false, 20))
        .with_message(factory::message(4, 1, true, 5))
}
