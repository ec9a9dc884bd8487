// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use bandstand_proc_macros::InjectDependencies;

use crate::app::deps::DynInboxDomainService;
use crate::app::event_handlers::{MessageEvent, ServerEvent, ServerEventHandler};

#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
    #[inject]
    inbox_domain_service: DynInboxDomainService,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => {
                self.handle_message_event(event).await?;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    async fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        match &event.message {
            Some(message) => info!(
                "Received message {} in conversation {}.",
                message.id, event.conversation_id
            ),
            None => info!("Received message in conversation {}.", event.conversation_id),
        }

        self.inbox_domain_service
            .handle_new_message(&event.conversation_id)
            .await
    }
}
