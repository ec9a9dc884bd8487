// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use bandstand_core_client::domain::conversations::services::mocks::MockConversationsService;
use bandstand_core_client::domain::realtime::services::mocks::MockRealtimeService;
use bandstand_core_client::dtos::{ConversationId, NavigationParams, UserId};
use bandstand_core_client::test::{mock_data, MessageBuilder};
use bandstand_core_client::{
    Client, MessageEvent, ServerEvent, ServerEventCallback, UserStatusEvent, UserStatusEventType,
};

/// A conversations service that answers every inbox request and counts thread loads. The first
/// `failing_loads` thread loads fail.
fn conversations_service(
    thread_loads: Arc<AtomicUsize>,
    failing_loads: usize,
) -> MockConversationsService {
    let mut service = MockConversationsService::new();

    service
        .expect_load_unread_count()
        .returning(|| Box::pin(async { Ok(0) }));
    service
        .expect_load_conversations()
        .returning(|| Box::pin(async { Ok(vec![]) }));
    service
        .expect_mark_conversation_read()
        .returning(|_| Box::pin(async { Ok(()) }));
    service
        .expect_load_messages()
        .returning(move |_, _, _| {
            let load = thread_loads.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if load < failing_loads {
                    return Err(anyhow!("HTTP 500"));
                }
                Ok(vec![MessageBuilder::new_with_index(1).build()])
            })
        });

    service
}

/// A realtime service that accepts every room change and counts joins.
fn realtime_service(joins: Arc<AtomicUsize>) -> MockRealtimeService {
    let mut service = MockRealtimeService::new();

    service.expect_join_conversation().returning(move |_| {
        joins.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { Ok(()) })
    });
    service
        .expect_leave_conversation()
        .returning(|_| Box::pin(async { Ok(()) }));

    service
}

fn params(conversation_id: &str) -> NavigationParams {
    NavigationParams {
        conversation_id: Some(conversation_id.into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_remount_with_same_conversation_rejoins_and_reloads() -> Result<()> {
    let thread_loads = Arc::new(AtomicUsize::new(0));
    let joins = Arc::new(AtomicUsize::new(0));

    let conversations_service = conversations_service(thread_loads.clone(), 1);
    let realtime_service = realtime_service(joins.clone());

    let client = Client::builder()
        .set_config(mock_data::app_config())
        .set_conversations_service(conversations_service)
        .set_realtime_service_provider(move |_| realtime_service)
        .build();

    assert!(client.inbox.mount(&params("c1")).await.is_err());
    assert_eq!(thread_loads.load(Ordering::SeqCst), 1);

    client.inbox.unmount().await;
    assert_eq!(client.inbox.snapshot().selected_conversation_id, None);

    client.inbox.mount(&params("c1")).await?;

    assert_eq!(thread_loads.load(Ordering::SeqCst), 2);
    assert_eq!(joins.load(Ordering::SeqCst), 2);
    assert_eq!(
        client.inbox.snapshot().selected_conversation_id,
        Some(ConversationId::from("c1"))
    );
    assert_eq!(client.inbox.messages().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_custom_realtime_service_delivers_events_to_inbox() -> Result<()> {
    let thread_loads = Arc::new(AtomicUsize::new(0));
    let event_callback = Arc::new(Mutex::new(None::<ServerEventCallback>));

    let conversations_service = conversations_service(thread_loads.clone(), 0);
    let realtime_service = realtime_service(Arc::new(AtomicUsize::new(0)));

    let client = Client::builder()
        .set_config(mock_data::app_config())
        .set_conversations_service(conversations_service)
        .set_realtime_service_provider({
            let event_callback = event_callback.clone();
            move |callback| {
                event_callback.lock().replace(callback);
                realtime_service
            }
        })
        .build();

    client.inbox.mount(&params("c1")).await?;
    assert_eq!(thread_loads.load(Ordering::SeqCst), 1);

    let Some(callback) = event_callback.lock().clone() else {
        panic!("The realtime service did not receive an event callback.");
    };

    callback(ServerEvent::UserStatus(UserStatusEvent {
        user_id: "u1".into(),
        r#type: UserStatusEventType::PresenceChanged { is_online: true },
    }))
    .await;
    callback(ServerEvent::UserStatus(UserStatusEvent {
        user_id: "u1".into(),
        r#type: UserStatusEventType::ComposeStateChanged {
            conversation_id: "c1".into(),
            is_composing: true,
        },
    }))
    .await;
    callback(ServerEvent::Message(MessageEvent {
        conversation_id: "c1".into(),
        message: None,
    }))
    .await;

    assert!(client.inbox.is_user_online(&UserId::from("u1")));
    assert_eq!(
        client.inbox.composing_users(&ConversationId::from("c1")),
        vec![UserId::from("u1")]
    );
    assert_eq!(thread_loads.load(Ordering::SeqCst), 2);

    Ok(())
}
