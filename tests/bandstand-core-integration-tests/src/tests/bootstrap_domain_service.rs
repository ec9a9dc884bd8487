// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use bandstand_core_client::domain::inbox::services::impls::BootstrapDomainService;
use bandstand_core_client::domain::inbox::services::BootstrapDomainService as _;
use bandstand_core_client::dtos::{
    BootstrapState, ConversationId, ListingId, NavigationParams, UserId,
};
use bandstand_core_client::test::{ConversationBuilder, MockBootstrapDomainServiceDependencies};
use bandstand_core_client::ClientEvent;

use super::record_events;

fn start_new_params() -> NavigationParams {
    NavigationParams {
        recipient_id: Some("u1".into()),
        recipient_name: Some("Jane".to_string()),
        listing_id: Some("l1".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_creates_conversation_exactly_once_for_concurrent_resolves() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service
        .expect_start_conversation()
        .once()
        .with(
            predicate::eq(UserId::from("u1")),
            predicate::eq(Some(ListingId::from("l1"))),
        )
        .return_once(|_, _| {
            Box::pin(async {
                Ok(ConversationBuilder::new("c9")
                    .set_participant("u1")
                    .set_listing("l1")
                    .build())
            })
        });
    deps.inbox_domain_service
        .expect_select_conversation()
        .once()
        .with(predicate::eq(Some(ConversationId::from("c9"))))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = BootstrapDomainService::from(deps);

    let params = start_new_params();
    let (first, second) = tokio::join!(service.resolve(&params), service.resolve(&params));
    first?;
    second?;

    let state = store.snapshot();
    assert_eq!(state.bootstrap, BootstrapState::Selected(Some("c9".into())));
    assert_eq!(
        state
            .conversations()
            .into_iter()
            .map(|c| c.id)
            .collect::<Vec<_>>(),
        vec![ConversationId::from("c9")]
    );
    assert!(!state.is_starting_conversation);
    assert_eq!(state.starting_notice, None);

    // A later resolve, e.g. after the parameters changed, is ignored as well.
    service
        .resolve(&NavigationParams {
            conversation_id: Some("c1".into()),
            ..Default::default()
        })
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_selects_existing_conversation_instead_of_creating_one() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    deps.inbox_state.conversations = vec![
        ConversationBuilder::new("c1").set_participant("u1").build(),
        ConversationBuilder::new("c2")
            .set_participant("u1")
            .set_listing("l1")
            .build(),
    ];
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service.expect_start_conversation().never();
    deps.inbox_domain_service
        .expect_select_conversation()
        .once()
        .with(predicate::eq(Some(ConversationId::from("c2"))))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = BootstrapDomainService::from(deps);

    service.resolve(&start_new_params()).await?;

    let state = store.snapshot();
    assert_eq!(state.bootstrap, BootstrapState::Selected(Some("c2".into())));
    assert_eq!(state.starting_notice, None);

    Ok(())
}

#[tokio::test]
async fn test_selects_direct_conversation() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service.expect_start_conversation().never();
    deps.inbox_domain_service
        .expect_select_conversation()
        .once()
        .with(predicate::eq(Some(ConversationId::from("c3"))))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = BootstrapDomainService::from(deps);

    service
        .resolve(&NavigationParams {
            conversation_id: Some("c3".into()),
            recipient_id: Some("u1".into()),
            ..Default::default()
        })
        .await?;

    assert_eq!(
        store.snapshot().bootstrap,
        BootstrapState::Selected(Some("c3".into()))
    );

    Ok(())
}

#[tokio::test]
async fn test_selects_nothing_without_params() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service.expect_start_conversation().never();
    deps.inbox_domain_service
        .expect_select_conversation()
        .never();

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = BootstrapDomainService::from(deps);

    service.resolve(&NavigationParams::default()).await?;

    let state = store.snapshot();
    assert_eq!(state.bootstrap, BootstrapState::Selected(None));
    assert_eq!(state.selected_conversation_id, None);
    assert_eq!(
        *events.lock(),
        vec![ClientEvent::BootstrapChanged, ClientEvent::BootstrapChanged]
    );

    Ok(())
}

#[tokio::test]
async fn test_failed_creation_is_recorded_and_not_retried() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service
        .expect_start_conversation()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow!("Recipient not found")) }));
    deps.inbox_domain_service.expect_select_conversation().never();

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = BootstrapDomainService::from(deps);

    assert!(service.resolve(&start_new_params()).await.is_err());

    let state = store.snapshot();
    let error = "Failed to start conversation. Recipient not found".to_string();
    assert_eq!(state.bootstrap, BootstrapState::Failed(error.clone()));
    assert_eq!(state.error, Some(error));
    assert!(!state.is_starting_conversation);
    assert_eq!(state.starting_notice, None);

    service.resolve(&start_new_params()).await?;

    Ok(())
}

#[tokio::test]
async fn test_starting_notice_expires_while_creating() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service
        .expect_start_conversation()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok(ConversationBuilder::new("c9").set_participant("u1").build())
            })
        });
    deps.inbox_domain_service
        .expect_select_conversation()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = Arc::new(BootstrapDomainService::from(deps));

    let handle = tokio::spawn({
        let service = service.clone();
        async move { service.resolve(&start_new_params()).await }
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    let state = store.snapshot();
    assert!(state.is_starting_conversation);
    assert_eq!(
        state.starting_notice,
        Some("Starting conversation with Jane…".to_string())
    );

    tokio::time::sleep(Duration::from_millis(130)).await;
    let state = store.snapshot();
    assert!(state.is_starting_conversation);
    assert_eq!(state.starting_notice, None);

    handle.await??;
    assert!(!store.snapshot().is_starting_conversation);

    Ok(())
}

#[tokio::test]
async fn test_discards_created_conversation_after_reset() -> Result<()> {
    let mut deps = MockBootstrapDomainServiceDependencies::default();
    record_events(&mut deps.client_event_dispatcher);

    deps.conversations_service
        .expect_start_conversation()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok(ConversationBuilder::new("c9").set_participant("u1").build())
            })
        });
    deps.inbox_domain_service.expect_select_conversation().never();

    let deps = deps.into_deps();
    let store = deps.inbox_store.clone();
    let service = Arc::new(BootstrapDomainService::from(deps));

    let handle = tokio::spawn({
        let service = service.clone();
        async move { service.resolve(&start_new_params()).await }
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    service.reset();

    handle.await??;

    let state = store.snapshot();
    assert_eq!(state.bootstrap, BootstrapState::Idle);
    assert!(state.conversations.is_empty());
    assert!(!state.is_starting_conversation);

    Ok(())
}
