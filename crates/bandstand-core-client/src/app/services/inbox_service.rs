// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::warn;

use bandstand_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynBootstrapDomainService, DynInboxDomainService, DynInboxStore, DynRealtimeService,
};
use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::inbox::models::{InboxAction, InboxState, NavigationParams};
use crate::domain::shared::models::{ConversationId, UserId};

/// Read access to the inbox and the intents that drive it.
#[derive(InjectDependencies)]
pub struct InboxService {
    #[inject]
    bootstrap_domain_service: DynBootstrapDomainService,
    #[inject]
    inbox_domain_service: DynInboxDomainService,
    #[inject]
    inbox_store: DynInboxStore,
    #[inject]
    realtime_service: DynRealtimeService,
}

impl InboxService {
    pub fn snapshot(&self) -> InboxState {
        self.inbox_store.snapshot()
    }

    /// The deduplicated conversation list, newest first.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.inbox_store.conversations()
    }

    /// The deduplicated thread of the selected conversation.
    pub fn messages(&self) -> Vec<Message> {
        self.inbox_store.messages()
    }

    pub fn selected_conversation(&self) -> Option<Conversation> {
        self.inbox_store.selected_conversation()
    }

    pub fn is_user_online(&self, user_id: &UserId) -> bool {
        self.inbox_store.is_user_online(user_id)
    }

    pub fn composing_users(&self, conversation_id: &ConversationId) -> Vec<UserId> {
        self.inbox_store.composing_users(conversation_id)
    }

    pub fn unread_count(&self) -> u32 {
        self.inbox_store.unread_count()
    }
}

impl InboxService {
    /// Prepares the inbox after it was navigated to with `params`.
    ///
    /// Loads the conversation list and the unread count, then opens the conversation `params`
    /// point to.
    pub async fn mount(&self, params: &NavigationParams) -> Result<()> {
        if let Err(err) = self.inbox_domain_service.refresh_unread_count().await {
            warn!("Failed to load unread count. {}", err);
        }

        // A failed list load does not prevent opening a conversation by id or creating a new one.
        if let Err(err) = self.inbox_domain_service.load_conversations().await {
            warn!("Failed to load conversations before bootstrapping. {}", err);
        }

        self.bootstrap(params).await
    }

    /// Tears down per-visit state. The next `mount` resolves its parameters again.
    ///
    /// The selection is cleared as well, so that mounting with the same conversation joins its
    /// room and reloads its thread once more.
    pub async fn unmount(&self) {
        self.bootstrap_domain_service.reset();

        let Some(conversation_id) = self.inbox_store.selected_conversation_id() else {
            return;
        };

        if let Err(err) = self
            .realtime_service
            .leave_conversation(&conversation_id)
            .await
        {
            warn!("Failed to leave conversation {}. {}", conversation_id, err);
        }

        self.inbox_store
            .dispatch(InboxAction::ConversationSelected(None));
    }

    pub async fn bootstrap(&self, params: &NavigationParams) -> Result<()> {
        self.bootstrap_domain_service.resolve(params).await
    }

    pub async fn load_conversations(&self) -> Result<()> {
        self.inbox_domain_service.load_conversations().await
    }

    pub async fn select_conversation(&self, conversation_id: Option<ConversationId>) -> Result<()> {
        self.inbox_domain_service
            .select_conversation(conversation_id)
            .await
    }

    /// Reloads the most recent page of the selected thread.
    pub async fn load_messages(&self) -> Result<()> {
        let Some(conversation_id) = self.inbox_store.selected_conversation_id() else {
            return Ok(());
        };
        self.inbox_domain_service.load_thread(&conversation_id).await
    }

    pub async fn load_older_messages(&self) -> Result<()> {
        self.inbox_domain_service.load_older_messages().await
    }

    pub async fn refresh_unread_count(&self) -> Result<()> {
        self.inbox_domain_service.refresh_unread_count().await
    }

    pub fn dismiss_error(&self) {
        self.inbox_store.dispatch(InboxAction::ErrorDismissed);
    }
}
