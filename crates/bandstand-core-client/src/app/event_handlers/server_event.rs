// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conversations::models::Message;
use crate::domain::shared::models::{ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Event related to the connection status.
    Connection(ConnectionEvent),
    /// Events about received messages.
    Message(MessageEvent),
    /// Events that affect the status of a user within a conversation or globally.
    UserStatus(UserStatusEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub conversation_id: ConversationId,
    /// The message as pushed by the server. Only used for logging, the thread is always reloaded
    /// from the REST API.
    pub message: Option<Message>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatusEvent {
    pub user_id: UserId,
    pub r#type: UserStatusEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserStatusEventType {
    PresenceChanged {
        is_online: bool,
    },
    ComposeStateChanged {
        conversation_id: ConversationId,
        is_composing: bool,
    },
}
