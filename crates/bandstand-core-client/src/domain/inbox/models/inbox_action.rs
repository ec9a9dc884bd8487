// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::inbox::models::BootstrapIntent;
use crate::domain::shared::models::{ConversationId, UserId};
use crate::ClientEvent;

/// Every change to `InboxState` is expressed as one of these, regardless of whether it
/// originates from a REST response, a realtime push or the user.
#[derive(Debug, Clone, PartialEq)]
pub enum InboxAction {
    ConversationsRequested,
    ConversationsLoaded(Vec<Conversation>),
    ConversationsRequestFailed(String),
    /// Inserts `conversation` or replaces the entry with the same id.
    ConversationUpserted(Conversation),
    ConversationPreviewUpdated {
        conversation_id: ConversationId,
        last_message: String,
        timestamp: DateTime<Utc>,
    },
    ConversationMarkedRead(ConversationId),
    ConversationSelected(Option<ConversationId>),

    MessagesRequested(ConversationId),
    /// A page of the thread of `conversation_id`. Page 1 holds the most recent messages.
    MessagesLoaded {
        conversation_id: ConversationId,
        page: u32,
        limit: u32,
        messages: Vec<Message>,
    },
    MessagesRequestFailed {
        conversation_id: ConversationId,
        error: String,
    },

    UnreadCountLoaded(u32),

    BootstrapStarted(BootstrapIntent),
    BootstrapCreating {
        notice: String,
    },
    BootstrapResolved(Option<ConversationId>),
    BootstrapFailed(String),
    BootstrapReset,
    StartingNoticeExpired {
        generation: u64,
    },

    UserPresenceChanged {
        user_id: UserId,
        is_online: bool,
    },
    UserComposingChanged {
        conversation_id: ConversationId,
        user_id: UserId,
        is_composing: bool,
    },

    ComposerInputChanged(String),
    MessageSubmitted,
    MessageSendFailed {
        content: String,
        error: String,
    },

    ErrorDismissed,
}

impl InboxAction {
    /// The events to dispatch if applying this action changed the state.
    pub fn client_events(&self) -> Vec<ClientEvent> {
        match self {
            Self::ConversationsRequested
            | Self::ConversationsLoaded(_)
            | Self::ConversationUpserted(_)
            | Self::ConversationPreviewUpdated { .. }
            | Self::ConversationMarkedRead(_) => vec![ClientEvent::ConversationsChanged],
            Self::ConversationsRequestFailed(_) => {
                vec![ClientEvent::ConversationsChanged, ClientEvent::ErrorChanged]
            }
            Self::ConversationSelected(conversation_id) => vec![ClientEvent::SelectionChanged {
                conversation_id: conversation_id.clone(),
            }],
            Self::MessagesRequested(conversation_id)
            | Self::MessagesLoaded {
                conversation_id, ..
            } => vec![ClientEvent::MessagesChanged {
                conversation_id: conversation_id.clone(),
            }],
            Self::MessagesRequestFailed {
                conversation_id, ..
            } => vec![
                ClientEvent::MessagesChanged {
                    conversation_id: conversation_id.clone(),
                },
                ClientEvent::ErrorChanged,
            ],
            Self::UnreadCountLoaded(count) => {
                vec![ClientEvent::UnreadCountChanged { count: *count }]
            }
            Self::BootstrapStarted(_)
            | Self::BootstrapCreating { .. }
            | Self::BootstrapResolved(_)
            | Self::BootstrapReset
            | Self::StartingNoticeExpired { .. } => vec![ClientEvent::BootstrapChanged],
            Self::BootstrapFailed(_) => {
                vec![ClientEvent::BootstrapChanged, ClientEvent::ErrorChanged]
            }
            Self::UserPresenceChanged { user_id, .. } => vec![ClientEvent::PresenceChanged {
                user_id: user_id.clone(),
            }],
            Self::UserComposingChanged {
                conversation_id, ..
            } => vec![ClientEvent::ComposingUsersChanged {
                conversation_id: conversation_id.clone(),
            }],
            Self::ComposerInputChanged(_) | Self::MessageSubmitted => {
                vec![ClientEvent::ComposerChanged]
            }
            Self::MessageSendFailed { .. } => {
                vec![ClientEvent::ComposerChanged, ClientEvent::ErrorChanged]
            }
            Self::ErrorDismissed => vec![ClientEvent::ErrorChanged],
        }
    }
}
