// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ConnectionState, ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the realtime connection has changed.
    ConnectionStatusChanged { state: ConnectionState },

    /// The conversation list (or one of its entries) has changed.
    ConversationsChanged,

    /// A different conversation was selected. `None` means nothing is selected.
    SelectionChanged {
        conversation_id: Option<ConversationId>,
    },

    /// The thread of `conversation_id` or its loading state changed.
    MessagesChanged { conversation_id: ConversationId },

    /// A new message arrived in the open thread. Views should scroll to the most recent message.
    ScrollToBottomRequested { conversation_id: ConversationId },

    /// `user_id` came online or went offline.
    PresenceChanged { user_id: UserId },

    /// A user in `conversation_id` started or stopped typing.
    ComposingUsersChanged { conversation_id: ConversationId },

    /// The total number of unread messages changed.
    UnreadCountChanged { count: u32 },

    /// The bootstrap moved to a different state or the starting notice was dismissed.
    BootstrapChanged,

    /// The text of the message composer changed.
    ComposerChanged,

    /// An error was set or dismissed.
    ErrorChanged,
}
