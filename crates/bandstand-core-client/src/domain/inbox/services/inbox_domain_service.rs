// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::conversations::models::Message;
use crate::domain::shared::models::ConversationId;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait InboxDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Replaces the conversation list with the one from the server.
    ///
    /// Failures are stored as the inbox error and returned.
    async fn load_conversations(&self) -> Result<()>;

    /// Reloads the first page of the thread of `conversation_id`.
    ///
    /// The result is discarded if `conversation_id` is no longer selected once it arrives.
    async fn load_thread(&self, conversation_id: &ConversationId) -> Result<()>;

    /// Loads the next page of older messages of the selected thread. Does nothing if there is
    /// no selection or the server signalled that there are no more messages.
    async fn load_older_messages(&self) -> Result<()>;

    /// Reloads the total unread count.
    async fn refresh_unread_count(&self) -> Result<()>;

    /// Makes `conversation_id` the selected conversation.
    ///
    /// - Leaves the realtime room of the previous selection and joins the new one.
    /// - Marks the conversation as read, locally and on the server.
    /// - Loads its thread.
    ///
    /// Selecting the already selected conversation does nothing.
    async fn select_conversation(&self, conversation_id: Option<ConversationId>) -> Result<()>;

    /// Reconciles a realtime "new message" notification.
    ///
    /// - If `conversation_id` is the selected conversation its thread is reloaded and a scroll to
    ///   the bottom is requested.
    /// - Otherwise the conversation list is reloaded.
    /// - The unread count is refreshed in both cases.
    async fn handle_new_message(&self, conversation_id: &ConversationId) -> Result<()>;

    /// Sends `content` to `conversation_id`, patches the conversation preview with the message
    /// the server returned and reloads the thread.
    async fn send_message(&self, conversation_id: &ConversationId, content: &str)
        -> Result<Message>;
}
