// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::inbox::models::{InboxAction, InboxState};
use crate::domain::shared::models::{ConversationId, UserId};

/// Single source of truth for the inbox. All mutations go through `dispatch`.
///
/// The narrow readers only copy what they return. Use `snapshot` when several fields need to be
/// read consistently.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait InboxStore: SendUnlessWasm + SyncUnlessWasm {
    /// Applies `action` and notifies observers if the state changed. Returns whether it did.
    fn dispatch(&self, action: InboxAction) -> bool;

    /// Returns a copy of the current state.
    fn snapshot(&self) -> InboxState;

    fn selected_conversation_id(&self) -> Option<ConversationId>;
    fn selected_conversation(&self) -> Option<Conversation>;

    /// Deduplicated conversations, newest first.
    fn conversations(&self) -> Vec<Conversation>;
    /// Deduplicated messages of the selected thread.
    fn messages(&self) -> Vec<Message>;

    fn is_user_online(&self, user_id: &UserId) -> bool;
    fn composing_users(&self, conversation_id: &ConversationId) -> Vec<UserId>;
    fn unread_count(&self) -> u32;
    fn composer_input(&self) -> String;
}
