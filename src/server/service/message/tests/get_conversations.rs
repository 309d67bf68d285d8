use super::*;

/// Expect conversations ordered by most recent activity
#[tokio::test]
async fn lists_most_recent_first() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();

    let page = MessageService::new(&state)
        .get_conversations(PageQuery::default())
        .await
        .unwrap();

    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(page.limit, 20);
    assert_eq!(page.items[0].unread_count, 2);

    Ok(())
}

/// Expect presence refresh to report how many partners are online
#[tokio::test]
async fn refresh_presence_counts_online_partners() -> Result<(), TestError> {
    let test = inbox().build()?;
    let state: AppState = test.state();
    let message_service = MessageService::new(&state);

    let online = message_service.refresh_presence().await;

    let page = message_service
        .get_conversations(PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.items.iter().filter(|c| c.is_online).count(), online);
    assert!(online <= 2);

    Ok(())
}
