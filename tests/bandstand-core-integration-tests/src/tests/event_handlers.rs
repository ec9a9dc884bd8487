// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use bandstand_core_client::app::event_handlers::{
    ConnectionEvent, ConnectionEventHandler, MessageEvent, MessagesEventHandler,
    PresenceEventHandler, ServerEvent, ServerEventHandler, ServerEventHandlerQueue,
    UserStatusEvent, UserStatusEventType,
};
use bandstand_core_client::dtos::{ConnectionState, ConversationId, UserId};
use bandstand_core_client::test::MockAppDependencies;
use bandstand_core_client::ClientEvent;

use super::record_events;

fn presence_event(user_id: &str, is_online: bool) -> ServerEvent {
    ServerEvent::UserStatus(UserStatusEvent {
        user_id: user_id.into(),
        r#type: UserStatusEventType::PresenceChanged { is_online },
    })
}

fn typing_event(conversation_id: &str, user_id: &str, is_composing: bool) -> ServerEvent {
    ServerEvent::UserStatus(UserStatusEvent {
        user_id: user_id.into(),
        r#type: UserStatusEventType::ComposeStateChanged {
            conversation_id: conversation_id.into(),
            is_composing,
        },
    })
}

fn message_event(conversation_id: &str) -> ServerEvent {
    ServerEvent::Message(MessageEvent {
        conversation_id: conversation_id.into(),
        message: None,
    })
}

#[tokio::test]
async fn test_rejoins_selected_conversation_on_connect() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.inbox_state.selected_conversation_id = Some("c1".into());
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.realtime_service
        .expect_join_conversation()
        .once()
        .with(predicate::eq(ConversationId::from("c1")))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let ctx = deps.ctx.clone();
    let handler = ConnectionEventHandler::from(&deps);

    let result = handler
        .handle_event(ServerEvent::Connection(ConnectionEvent::Connected))
        .await?;

    assert_eq!(result, None);
    assert_eq!(ctx.connection_state(), ConnectionState::Connected);
    assert_eq!(
        *events.lock(),
        vec![ClientEvent::ConnectionStatusChanged {
            state: ConnectionState::Connected
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_marks_connection_lost() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_connection_state(ConnectionState::Connected);
    record_events(&mut deps.client_event_dispatcher);

    let deps = deps.into_deps();
    let ctx = deps.ctx.clone();
    let handler = ConnectionEventHandler::from(&deps);

    handler
        .handle_event(ServerEvent::Connection(ConnectionEvent::Disconnected {
            error: Some("Connection reset by peer".to_string()),
        }))
        .await?;

    assert_eq!(ctx.connection_state(), ConnectionState::Disconnected);

    Ok(())
}

#[tokio::test]
async fn test_forwards_new_messages_to_inbox() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.inbox_domain_service
        .expect_handle_new_message()
        .once()
        .with(predicate::eq(ConversationId::from("c2")))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let handler = MessagesEventHandler::from(&deps.into_deps());

    assert_eq!(handler.handle_event(message_event("c2")).await?, None);
    assert_eq!(
        handler.handle_event(presence_event("u1", true)).await?,
        Some(presence_event("u1", true))
    );

    Ok(())
}

#[tokio::test]
async fn test_tracks_presence_and_typing() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let handler = PresenceEventHandler::from(&deps);

    handler.handle_event(presence_event("u1", true)).await?;
    handler.handle_event(presence_event("u2", true)).await?;
    handler.handle_event(presence_event("u2", false)).await?;
    handler.handle_event(typing_event("c1", "u1", true)).await?;
    handler.handle_event(typing_event("c1", "u3", true)).await?;
    handler.handle_event(typing_event("c1", "u3", false)).await?;

    let state = store.snapshot();
    assert!(state.is_user_online(&"u1".into()));
    assert!(!state.is_user_online(&"u2".into()));
    assert_eq!(state.composing_users(&"c1".into()), vec![UserId::from("u1")]);

    // Repeated presence updates do not notify the client again.
    let count = events.lock().len();
    handler.handle_event(presence_event("u1", true)).await?;
    assert_eq!(events.lock().len(), count);

    assert_eq!(
        handler.handle_event(message_event("c1")).await?,
        Some(message_event("c1"))
    );

    Ok(())
}

#[tokio::test]
async fn test_queue_routes_events_to_handlers() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.inbox_domain_service
        .expect_handle_new_message()
        .once()
        .return_once(|_| Box::pin(async { Err(anyhow!("HTTP 500")) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();

    let queue = ServerEventHandlerQueue::new();
    queue.set_handlers(vec![
        Box::new(ConnectionEventHandler::from(&deps)),
        Box::new(MessagesEventHandler::from(&deps)),
        Box::new(PresenceEventHandler::from(&deps)),
    ]);

    // Handler errors are logged and do not stop later events.
    queue.handle_event(message_event("c1")).await;
    queue.handle_event(presence_event("u1", true)).await;

    assert!(store.snapshot().is_user_online(&"u1".into()));

    Ok(())
}
