// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{error, info};

use bandstand_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynCredentialsRepository, DynRealtimeService,
};
use crate::domain::shared::models::ConnectionState;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ConnectionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    credentials_repo: DynCredentialsRepository,
    #[inject]
    realtime_service: DynRealtimeService,
}

impl ConnectionService {
    /// Opens the realtime connection with the stored token. Without a token the connection
    /// stays `Disconnected` and the inbox works from REST alone.
    pub async fn connect(&self) -> Result<()> {
        let Some(token) = self.credentials_repo.token() else {
            info!("Not connecting to the realtime bridge since no token is stored.");
            return Ok(());
        };

        self.set_connection_state(ConnectionState::Connecting);

        if let Err(err) = self.realtime_service.connect(Some(token)).await {
            error!("Failed to connect to the realtime bridge. {}", err);
            self.set_connection_state(ConnectionState::Disconnected);
            return Err(err);
        }

        Ok(())
    }

    pub async fn disconnect(&self) {
        self.realtime_service.disconnect().await;
        self.set_connection_state(ConnectionState::Disconnected);
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }
}

impl ConnectionService {
    fn set_connection_state(&self, state: ConnectionState) {
        if self.ctx.connection_state() == state {
            return;
        }
        self.ctx.set_connection_state(state);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged { state });
    }
}
