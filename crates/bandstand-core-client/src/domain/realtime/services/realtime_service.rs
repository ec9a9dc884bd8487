// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::shared::models::ConversationId;

/// Outbound half of the realtime bridge. Inbound traffic is delivered as `ServerEvent`s to the
/// event handler queue.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RealtimeService: SendUnlessWasm + SyncUnlessWasm {
    /// Opens the socket. Without a token the bridge stays disconnected and no error is returned.
    async fn connect(&self, token: Option<Secret<String>>) -> Result<()>;
    async fn disconnect(&self);

    async fn join_conversation(&self, conversation_id: &ConversationId) -> Result<()>;
    async fn leave_conversation(&self, conversation_id: &ConversationId) -> Result<()>;

    async fn start_typing(&self, conversation_id: &ConversationId) -> Result<()>;
    async fn stop_typing(&self, conversation_id: &ConversationId) -> Result<()>;
}
