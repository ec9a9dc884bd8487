// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use bandstand_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConversationsService, DynInboxStore,
    DynRealtimeService,
};
use crate::domain::conversations::models::Message;
use crate::domain::inbox::models::InboxAction;
use crate::domain::shared::models::ConversationId;
use crate::ClientEvent;

use super::super::InboxDomainService as InboxDomainServiceTrait;
use super::failure_message;

#[derive(DependenciesStruct)]
pub struct InboxDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversations_service: DynConversationsService,
    ctx: DynAppContext,
    inbox_store: DynInboxStore,
    realtime_service: DynRealtimeService,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl InboxDomainServiceTrait for InboxDomainService {
    #[tracing::instrument(skip(self))]
    async fn load_conversations(&self) -> Result<()> {
        self.inbox_store
            .dispatch(InboxAction::ConversationsRequested);

        match self.conversations_service.load_conversations().await {
            Ok(conversations) => {
                debug!("Loaded {} conversations.", conversations.len());
                self.inbox_store
                    .dispatch(InboxAction::ConversationsLoaded(conversations));
                Ok(())
            }
            Err(err) => {
                self.inbox_store
                    .dispatch(InboxAction::ConversationsRequestFailed(failure_message(
                        "load conversations",
                        &err,
                    )));
                Err(err)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn load_thread(&self, conversation_id: &ConversationId) -> Result<()> {
        self.load_page(conversation_id, 1).await
    }

    #[tracing::instrument(skip(self))]
    async fn load_older_messages(&self) -> Result<()> {
        let state = self.inbox_store.snapshot();

        let Some(conversation_id) = state.selected_conversation_id else {
            return Ok(());
        };

        if !state.has_more_messages || state.is_loading_messages {
            return Ok(());
        }

        self.load_page(&conversation_id, state.thread_page + 1)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn refresh_unread_count(&self) -> Result<()> {
        let count = self.conversations_service.load_unread_count().await?;
        self.inbox_store
            .dispatch(InboxAction::UnreadCountLoaded(count));
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn select_conversation(&self, conversation_id: Option<ConversationId>) -> Result<()> {
        let previous_id = self.inbox_store.selected_conversation_id();

        if previous_id == conversation_id {
            return Ok(());
        }

        if let Some(previous_id) = &previous_id {
            if let Err(err) = self.realtime_service.leave_conversation(previous_id).await {
                warn!("Failed to leave conversation {}. {}", previous_id, err);
            }
        }

        self.inbox_store
            .dispatch(InboxAction::ConversationSelected(conversation_id.clone()));

        let Some(conversation_id) = conversation_id else {
            return Ok(());
        };

        if let Err(err) = self
            .realtime_service
            .join_conversation(&conversation_id)
            .await
        {
            warn!("Failed to join conversation {}. {}", conversation_id, err);
        }

        self.inbox_store
            .dispatch(InboxAction::ConversationMarkedRead(conversation_id.clone()));

        if let Err(err) = self
            .conversations_service
            .mark_conversation_read(&conversation_id)
            .await
        {
            warn!(
                "Failed to mark conversation {} as read. {}",
                conversation_id, err
            );
        }

        self.load_thread(&conversation_id).await?;

        if let Err(err) = self.refresh_unread_count().await {
            warn!("Failed to refresh unread count. {}", err);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn handle_new_message(&self, conversation_id: &ConversationId) -> Result<()> {
        let is_selected =
            self.inbox_store.selected_conversation_id().as_ref() == Some(conversation_id);

        let result = if is_selected {
            let result = self.load_thread(conversation_id).await;
            if result.is_ok() {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ScrollToBottomRequested {
                        conversation_id: conversation_id.clone(),
                    });
            }
            result
        } else {
            self.load_conversations().await
        };

        let unread_result = self.refresh_unread_count().await;
        result.and(unread_result)
    }

    #[tracing::instrument(skip(self, content))]
    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        content: &str,
    ) -> Result<Message> {
        let message = self
            .conversations_service
            .send_message(conversation_id, content)
            .await?;

        self.inbox_store
            .dispatch(InboxAction::ConversationPreviewUpdated {
                conversation_id: conversation_id.clone(),
                last_message: message.content.clone(),
                timestamp: message.timestamp,
            });

        // The message was stored. A failing reload only leaves the thread stale and is
        // recorded as the inbox error.
        if let Err(err) = self.load_thread(conversation_id).await {
            warn!("Failed to reload thread after sending. {}", err);
        }

        Ok(message)
    }
}

impl InboxDomainService {
    async fn load_page(&self, conversation_id: &ConversationId, page: u32) -> Result<()> {
        let limit = self.ctx.config.message_page_size;

        self.inbox_store
            .dispatch(InboxAction::MessagesRequested(conversation_id.clone()));

        match self
            .conversations_service
            .load_messages(conversation_id, page, limit)
            .await
        {
            Ok(messages) => {
                let applied = self.inbox_store.dispatch(InboxAction::MessagesLoaded {
                    conversation_id: conversation_id.clone(),
                    page,
                    limit,
                    messages,
                });
                if !applied {
                    debug!(
                        "Discarded page {} of {} since it is no longer selected.",
                        page, conversation_id
                    );
                }
                Ok(())
            }
            Err(err) => {
                self.inbox_store
                    .dispatch(InboxAction::MessagesRequestFailed {
                        conversation_id: conversation_id.clone(),
                        error: failure_message("load messages", &err),
                    });
                Err(err)
            }
        }
    }
}
