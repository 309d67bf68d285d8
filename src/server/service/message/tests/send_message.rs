use super::*;

/// Expect a sent message to appear in a previously cached thread
#[tokio::test]
async fn sends_and_invalidates_thread() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();
    let message_service = MessageService::new(&state);

    message_service.get_messages(1, PageQuery::default()).await.unwrap();
    message_service.get_messages(2, PageQuery::default()).await.unwrap();

    let message = message_service.send_message(1, "  See you then!  ").await.unwrap();

    assert_eq!(message.id, 5);
    assert_eq!(message.text, "See you then!");
    assert!(message.is_own);
    assert_eq!(message.sender_id, "current_user");

    let thread = message_service.get_messages(1, PageQuery::default()).await.unwrap();
    assert_eq!(thread.total, 2);
    assert_eq!(thread.items.last().map(|m| m.id), Some(5));

    // Other conversations keep their cached pages
    assert_eq!(state.cache.messages.lock().await.len(), 2);

    let conversations = message_service
        .get_conversations(PageQuery::default())
        .await
        .unwrap();
    assert_eq!(conversations.items[0].id, 1);
    assert_eq!(conversations.items[0].last_message, "See you then!");

    Ok(())
}

/// Expect blank messages to be rejected
#[tokio::test]
async fn rejects_empty_message() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();

    let result = MessageService::new(&state).send_message(1, "   ").await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::EmptyMessage))
    ));

    Ok(())
}

/// Expect a not found error for an unknown conversation
#[tokio::test]
async fn fails_for_unknown_conversation() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();

    let result = MessageService::new(&state).send_message(3, "Hello").await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::ConversationNotFound(3)))
    ));

    Ok(())
}
