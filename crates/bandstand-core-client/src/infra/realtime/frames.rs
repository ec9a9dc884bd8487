// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::app::event_handlers::{MessageEvent, ServerEvent, UserStatusEvent, UserStatusEventType};
use crate::domain::conversations::models::Message;
use crate::domain::shared::models::{ConversationId, UserId};

/// Every frame on the socket is a JSON object `{"event": "<name>", "data": {…}}`.
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Frame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Display, Debug, Clone, Copy, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub(crate) enum OutboundEvent {
    JoinConversation,
    LeaveConversation,
    StartTyping,
    StopTyping,
}

#[derive(EnumString, Debug, Clone, Copy, PartialEq)]
#[strum(serialize_all = "camelCase")]
enum InboundEvent {
    NewMessage,
    UserOnline,
    UserOffline,
    UserTyping,
    UserStoppedTyping,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationPayload<'a> {
    conversation_id: &'a ConversationId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewMessagePayload {
    conversation_id: ConversationId,
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    user_id: UserId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypingPayload {
    conversation_id: ConversationId,
    user_id: UserId,
}

pub(crate) fn encode_frame(
    event: OutboundEvent,
    conversation_id: &ConversationId,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Frame {
        event: event.to_string(),
        data: serde_json::to_value(ConversationPayload { conversation_id })?,
    })
}

/// Parses a text frame. Returns `Ok(None)` for events we do not handle.
pub(crate) fn parse_frame(text: &str) -> Result<Option<ServerEvent>, serde_json::Error> {
    let frame = serde_json::from_str::<Frame>(text)?;

    let Ok(event) = InboundEvent::from_str(&frame.event) else {
        return Ok(None);
    };

    let event = match event {
        InboundEvent::NewMessage => {
            let payload = serde_json::from_value::<NewMessagePayload>(frame.data)?;
            ServerEvent::Message(MessageEvent {
                conversation_id: payload.conversation_id,
                message: payload.message,
            })
        }
        InboundEvent::UserOnline | InboundEvent::UserOffline => {
            let payload = serde_json::from_value::<UserPayload>(frame.data)?;
            ServerEvent::UserStatus(UserStatusEvent {
                user_id: payload.user_id,
                r#type: UserStatusEventType::PresenceChanged {
                    is_online: event == InboundEvent::UserOnline,
                },
            })
        }
        InboundEvent::UserTyping | InboundEvent::UserStoppedTyping => {
            let payload = serde_json::from_value::<TypingPayload>(frame.data)?;
            ServerEvent::UserStatus(UserStatusEvent {
                user_id: payload.user_id,
                r#type: UserStatusEventType::ComposeStateChanged {
                    conversation_id: payload.conversation_id,
                    is_composing: event == InboundEvent::UserTyping,
                },
            })
        }
    };

    Ok(Some(event))
}
