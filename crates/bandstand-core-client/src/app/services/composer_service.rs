// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use bandstand_proc_macros::InjectDependencies;
use bandstand_wasm_utils::{sleep, spawn};

use crate::app::deps::{DynAppContext, DynInboxDomainService, DynInboxStore, DynRealtimeService};
use crate::domain::inbox::models::{InboxAction, TypingIndicator};
use crate::domain::inbox::services::impls::failure_message;
use crate::domain::shared::models::ConversationId;

/// The message input of the selected conversation.
#[derive(InjectDependencies)]
pub struct ComposerService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    inbox_domain_service: DynInboxDomainService,
    #[inject]
    inbox_store: DynInboxStore,
    #[inject]
    realtime_service: DynRealtimeService,
    typing_indicator: Arc<TypingIndicator>,
}

impl ComposerService {
    pub fn input(&self) -> String {
        self.inbox_store.composer_input()
    }

    /// Replaces the text of the composer and announces that the user is typing.
    ///
    /// The typing indicator is started once per burst of keystrokes and stopped after
    /// `AppConfig::typing_quiet_period` without further input.
    pub async fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        let is_blank = text.trim().is_empty();

        self.inbox_store
            .dispatch(InboxAction::ComposerInputChanged(text));

        let Some(conversation_id) = self.inbox_store.selected_conversation_id() else {
            return;
        };

        if is_blank {
            self.stop_typing().await;
            return;
        }

        let keystroke = self.typing_indicator.keystroke(&conversation_id);

        if let Some(abandoned_conversation) = &keystroke.abandoned_conversation {
            self.send_stop_typing(abandoned_conversation).await;
        }

        if keystroke.started {
            if let Err(err) = self.realtime_service.start_typing(&conversation_id).await {
                warn!("Failed to send typing indicator. {}", err);
            }
        }

        let typing_indicator = self.typing_indicator.clone();
        let realtime_service = self.realtime_service.clone();
        let quiet_period = self.ctx.config.typing_quiet_period;
        let generation = keystroke.generation;

        spawn(async move {
            sleep(quiet_period).await;

            let Some(conversation_id) = typing_indicator.expire(generation) else {
                return;
            };

            if let Err(err) = realtime_service.stop_typing(&conversation_id).await {
                warn!("Failed to stop typing indicator. {}", err);
            }
        });
    }

    /// Sends the text of the composer to the selected conversation.
    ///
    /// The composer is cleared right away. If sending fails, its previous text is restored and
    /// the error is stored in the inbox. Blank input is ignored.
    #[tracing::instrument(skip(self))]
    pub async fn send(&self) -> Result<()> {
        let state = self.inbox_store.snapshot();
        let content = state.composer_input;

        if content.trim().is_empty() {
            return Ok(());
        }

        let Some(conversation_id) = state.selected_conversation_id else {
            debug!("Not sending message since no conversation is selected.");
            return Ok(());
        };

        self.inbox_store.dispatch(InboxAction::MessageSubmitted);
        self.stop_typing().await;

        if let Err(err) = self
            .inbox_domain_service
            .send_message(&conversation_id, content.trim())
            .await
        {
            self.inbox_store.dispatch(InboxAction::MessageSendFailed {
                content,
                error: failure_message("send message", &err),
            });
            return Err(err);
        }

        Ok(())
    }
}

impl ComposerService {
    async fn stop_typing(&self) {
        if let Some(conversation_id) = self.typing_indicator.reset() {
            self.send_stop_typing(&conversation_id).await;
        }
    }

    async fn send_stop_typing(&self, conversation_id: &ConversationId) {
        if let Err(err) = self.realtime_service.stop_typing(conversation_id).await {
            warn!("Failed to stop typing indicator. {}", err);
        }
    }
}
