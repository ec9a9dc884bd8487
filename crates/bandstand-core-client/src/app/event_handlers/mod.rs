// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use bandstand_wasm_utils::{PinnedFuture, SendUnlessWasm, SyncUnlessWasm};

pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use presence_event_handler::PresenceEventHandler;
pub use server_event::*;

use crate::ClientEvent;

mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod presence_event_handler;
mod server_event;

/// Hands the events received by a realtime bridge to the client. A bridge awaits each call before
/// passing the next event, so that events are handled in the order they arrived.
#[cfg(not(target_arch = "wasm32"))]
pub type ServerEventCallback = Arc<dyn Fn(ServerEvent) -> PinnedFuture<()> + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type ServerEventCallback = Arc<dyn Fn(ServerEvent) -> PinnedFuture<()>>;

/// Reacts to events pushed by the realtime bridge.
///
/// Returning `Ok(None)` consumes the event. Returning `Ok(Some(event))` hands it on to the next
/// handler in the `ServerEventHandlerQueue`.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait ServerEventHandler: SendUnlessWasm + SyncUnlessWasm {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch_event(&self, event: ClientEvent);
}
