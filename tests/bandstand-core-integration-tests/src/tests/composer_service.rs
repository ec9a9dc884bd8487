// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::{anyhow, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use bandstand_core_client::dtos::ConversationId;
use bandstand_core_client::services::ComposerService;
use bandstand_core_client::test::{MessageBuilder, MockAppDependencies};
use bandstand_core_client::ClientEvent;

use super::record_events;

#[tokio::test]
async fn test_sends_trimmed_input_and_clears_composer() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.selected_conversation_id = Some("c1".into());
    deps.inbox_state.composer_input = "  Is the amp still available?  ".to_string();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.inbox_domain_service
        .expect_send_message()
        .once()
        .with(
            predicate::eq(ConversationId::from("c1")),
            predicate::eq("Is the amp still available?"),
        )
        .return_once(|_, _| {
            Box::pin(async {
                Ok(MessageBuilder::new_with_index(1)
                    .set_sender("me")
                    .set_content("Is the amp still available?")
                    .build())
            })
        });

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = ComposerService::from(&deps);

    service.send().await?;

    assert_eq!(service.input(), "");
    assert_eq!(store.snapshot().error, None);
    assert_eq!(*events.lock(), vec![ClientEvent::ComposerChanged]);

    Ok(())
}

#[tokio::test]
async fn test_restores_input_when_sending_fails() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.selected_conversation_id = Some("c1".into());
    deps.inbox_state.composer_input = "Hello".to_string();
    record_events(&mut deps.client_event_dispatcher);

    deps.inbox_domain_service
        .expect_send_message()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow!("HTTP 503")) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = ComposerService::from(&deps);

    assert!(service.send().await.is_err());

    assert_eq!(service.input(), "Hello");
    assert_eq!(
        store.snapshot().error,
        Some("Failed to send message. HTTP 503".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_does_not_send_without_selected_conversation() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.composer_input = "Hello".to_string();

    deps.inbox_domain_service.expect_send_message().never();

    let deps = deps.into_deps();
    let service = ComposerService::from(&deps);

    // No conversation is selected.
    service.send().await?;
    assert_eq!(service.input(), "Hello");

    Ok(())
}

#[tokio::test]
async fn test_starts_typing_once_and_stops_after_quiet_period() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.selected_conversation_id = Some("c1".into());
    record_events(&mut deps.client_event_dispatcher);

    deps.realtime_service
        .expect_start_typing()
        .once()
        .with(predicate::eq(ConversationId::from("c1")))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.realtime_service
        .expect_stop_typing()
        .once()
        .with(predicate::eq(ConversationId::from("c1")))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let service = ComposerService::from(&deps);

    service.set_input("H").await;
    service.set_input("He").await;
    service.set_input("Hey").await;
    assert_eq!(service.input(), "Hey");

    tokio::time::sleep(Duration::from_millis(150)).await;

    Ok(())
}

#[tokio::test]
async fn test_clearing_input_stops_typing_immediately() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.selected_conversation_id = Some("c1".into());
    record_events(&mut deps.client_event_dispatcher);

    deps.realtime_service
        .expect_start_typing()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.realtime_service
        .expect_stop_typing()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let service = ComposerService::from(&deps);

    service.set_input("Hi").await;
    service.set_input("").await;

    // The pending quiet period timer must not stop typing a second time.
    tokio::time::sleep(Duration::from_millis(150)).await;

    Ok(())
}
