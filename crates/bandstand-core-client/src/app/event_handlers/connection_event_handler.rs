// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use bandstand_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynInboxStore, DynRealtimeService,
};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::domain::shared::models::ConnectionState;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ConnectionEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    inbox_store: DynInboxStore,
    #[inject]
    realtime_service: DynRealtimeService,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        match event {
            ConnectionEvent::Connected => {
                info!("Realtime connection established.");
                self.set_connection_state(ConnectionState::Connected);

                // Rooms are bound to the socket, so the open conversation needs to be joined
                // again after every (re)connect.
                let selected_id = self.inbox_store.selected_conversation_id();
                if let Some(conversation_id) = selected_id {
                    if let Err(err) = self
                        .realtime_service
                        .join_conversation(&conversation_id)
                        .await
                    {
                        warn!("Failed to rejoin conversation {}. {}", conversation_id, err);
                    }
                }
            }
            ConnectionEvent::Disconnected { error } => {
                match error {
                    Some(error) => warn!("Realtime connection lost. {}", error),
                    None => info!("Realtime connection closed."),
                }
                self.set_connection_state(ConnectionState::Disconnected);
            }
        }
        Ok(())
    }

    fn set_connection_state(&self, state: ConnectionState) {
        if self.ctx.connection_state() == state {
            return;
        }
        self.ctx.set_connection_state(state);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged { state });
    }
}
