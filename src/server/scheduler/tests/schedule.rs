use super::*;

/// Expect every configured cron expression to be accepted
#[test]
fn cron_expressions_parse() {
    for cron in [
        cache_sweep_config::CRON_EXPRESSION,
        presence_config::CRON_EXPRESSION,
    ] {
        let job = Job::new_async(cron, |_, _| Box::pin(async {}));
        assert!(job.is_ok(), "invalid cron expression {}", cron);
    }
}

/// Expect both jobs to register and the scheduler to start
#[tokio::test(flavor = "multi_thread")]
async fn starts_with_all_jobs() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state: AppState = test.state();

    let scheduler = Scheduler::new(state).await.unwrap();

    assert!(scheduler.start().await.is_ok());

    Ok(())
}
