// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use pretty_assertions::assert_eq;
use secrecy::{ExposeSecret, Secret};

use bandstand_core_client::dtos::ConnectionState;
use bandstand_core_client::services::ConnectionService;
use bandstand_core_client::test::MockAppDependencies;
use bandstand_core_client::ClientEvent;

use super::record_events;

#[tokio::test]
async fn test_stays_disconnected_without_token() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.credentials_repo.expect_token().returning(|| None);
    deps.realtime_service.expect_connect().never();
    deps.client_event_dispatcher.expect_dispatch_event().never();

    let service = ConnectionService::from(&deps.into_deps());
    service.connect().await?;

    assert_eq!(service.connection_state(), ConnectionState::Disconnected);

    Ok(())
}

#[tokio::test]
async fn test_connects_with_stored_token() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.credentials_repo
        .expect_token()
        .returning(|| Some(Secret::new("token-1".to_string())));
    deps.realtime_service
        .expect_connect()
        .once()
        .withf(|token| {
            token.as_ref().map(|token| token.expose_secret().as_str()) == Some("token-1")
        })
        .return_once(|_| Box::pin(async { Ok(()) }));

    let service = ConnectionService::from(&deps.into_deps());
    service.connect().await?;

    // `Connected` is set once the bridge reports it.
    assert_eq!(service.connection_state(), ConnectionState::Connecting);
    assert_eq!(
        *events.lock(),
        vec![ClientEvent::ConnectionStatusChanged {
            state: ConnectionState::Connecting
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_resets_state_when_connecting_fails() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.credentials_repo
        .expect_token()
        .returning(|| Some(Secret::new("token-1".to_string())));
    deps.realtime_service
        .expect_connect()
        .once()
        .return_once(|_| Box::pin(async { Err(anyhow!("Connection refused")) }));

    let service = ConnectionService::from(&deps.into_deps());
    assert!(service.connect().await.is_err());

    assert_eq!(service.connection_state(), ConnectionState::Disconnected);
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connecting
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Disconnected
            }
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_disconnect_closes_bridge() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_connection_state(ConnectionState::Connected);
    record_events(&mut deps.client_event_dispatcher);

    deps.realtime_service
        .expect_disconnect()
        .once()
        .return_once(|| Box::pin(async {}));

    let service = ConnectionService::from(&deps.into_deps());
    service.disconnect().await;

    assert_eq!(service.connection_state(), ConnectionState::Disconnected);

    Ok(())
}
