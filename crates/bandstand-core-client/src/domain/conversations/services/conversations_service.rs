// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::shared::models::{ConversationId, ListingId, UserId};

/// The messaging endpoints of the marketplace REST API.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationsService: SendUnlessWasm + SyncUnlessWasm {
    /// Loads all conversations of the current user.
    async fn load_conversations(&self) -> Result<Vec<Conversation>>;

    /// Loads one page of the thread identified by `conversation_id`. Pages start at 1, messages
    /// within a page are ordered ascending by time.
    async fn load_messages(
        &self,
        conversation_id: &ConversationId,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Message>>;

    /// Sends `content` to `conversation_id` and returns the stored message.
    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        content: &str,
    ) -> Result<Message>;

    /// Creates (or, depending on the server, returns an existing) conversation with
    /// `recipient_id`, optionally scoped to `listing_id`.
    async fn start_conversation(
        &self,
        recipient_id: &UserId,
        listing_id: Option<ListingId>,
    ) -> Result<Conversation>;

    /// Loads the number of unread messages across all conversations.
    async fn load_unread_count(&self) -> Result<u32>;

    /// Marks all messages in `conversation_id` as read.
    async fn mark_conversation_read(&self, conversation_id: &ConversationId) -> Result<()>;
}
