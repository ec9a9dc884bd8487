// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Response and request bodies of the messaging endpoints.
//!
//! Depending on the endpoint and server version, payloads arrive either bare or wrapped in an
//! object (`{"data": …}`, `{"conversations": […]}`, `{"count": 3}`, …). Both forms are
//! accepted.

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ConversationId, ListingId, UserId};

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "conversations", alias = "messages")]
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Wrapped { data } => data,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ItemEnvelope<T> {
    Wrapped {
        #[serde(alias = "conversation", alias = "message")]
        data: T,
    },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(item) => item,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum CountEnvelope {
    Bare(u32),
    Wrapped {
        #[serde(alias = "unreadCount", alias = "data")]
        count: u32,
    },
}

impl CountEnvelope {
    pub fn into_inner(self) -> u32 {
        match self {
            Self::Bare(count) => count,
            Self::Wrapped { count } => count,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendMessageRequest<'a> {
    pub conversation_id: &'a ConversationId,
    pub content: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StartConversationRequest<'a> {
    pub recipient_id: &'a UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<ListingId>,
}
