// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use bandstand_proc_macros::InjectDependencies;

use crate::app::deps::DynInboxStore;
use crate::app::event_handlers::{
    ServerEvent, ServerEventHandler, UserStatusEvent, UserStatusEventType,
};
use crate::domain::inbox::models::InboxAction;

/// Applies presence and typing notifications. These only ever touch the online set and the
/// composing users, never the conversations themselves.
#[derive(InjectDependencies)]
pub struct PresenceEventHandler {
    #[inject]
    inbox_store: DynInboxStore,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ServerEventHandler for PresenceEventHandler {
    fn name(&self) -> &'static str {
        "presence"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::UserStatus(event) => self.handle_user_status_event(event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl PresenceEventHandler {
    fn handle_user_status_event(&self, event: UserStatusEvent) {
        let action = match event.r#type {
            UserStatusEventType::PresenceChanged { is_online } => {
                InboxAction::UserPresenceChanged {
                    user_id: event.user_id,
                    is_online,
                }
            }
            UserStatusEventType::ComposeStateChanged {
                conversation_id,
                is_composing,
            } => InboxAction::UserComposingChanged {
                conversation_id,
                user_id: event.user_id,
                is_composing,
            },
        };
        self.inbox_store.dispatch(action);
    }
}
