use super::*;

/// Expect the unread count cleared and partner messages marked read
#[tokio::test]
async fn clears_unread_messages() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();
    let message_service = MessageService::new(&state);

    let conversation = message_service.mark_as_read(2).await.unwrap();

    assert_eq!(conversation.unread_count, 0);
    let thread = message_service.get_messages(2, PageQuery::default()).await.unwrap();
    assert!(thread.items.iter().all(|m| m.read));

    Ok(())
}

/// Expect a not found error for an unknown conversation
#[tokio::test]
async fn fails_for_unknown_conversation() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();

    assert!(matches!(
        MessageService::new(&state).mark_as_read(8).await,
        Err(Error::ResourceError(ResourceError::ConversationNotFound(8)))
    ));

    Ok(())
}
