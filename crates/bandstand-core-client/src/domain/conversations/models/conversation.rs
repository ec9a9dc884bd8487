// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ConversationId, ConversationKey, ListingId, UserId};

/// A user taking part in a conversation or authoring a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// The listing a conversation is scoped to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingSummary {
    #[serde(rename = "_id")]
    pub id: ListingId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(alias = "_id")]
    pub id: ConversationId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub unread_count: u32,
    pub other_participant: Participant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_key: Option<ConversationKey>,
}

/// The identity under which two conversations are considered the same thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConversationIdentity {
    Key(ConversationKey),
    Participants {
        participant_id: UserId,
        listing_id: Option<ListingId>,
    },
}

impl Conversation {
    /// `conversation_key` if the server provided one, otherwise the pair of the other
    /// participant and the (optional) listing.
    pub fn identity(&self) -> ConversationIdentity {
        if let Some(key) = &self.conversation_key {
            return ConversationIdentity::Key(key.clone());
        }

        ConversationIdentity::Participants {
            participant_id: self.other_participant.id.clone(),
            listing_id: self.listing_id().cloned(),
        }
    }

    pub fn listing_id(&self) -> Option<&ListingId> {
        self.listing.as_ref().map(|listing| &listing.id)
    }

    /// Whether this conversation is held with `recipient_id` about `listing_id`. A missing
    /// `listing_id` only matches conversations without a listing.
    pub fn matches(&self, recipient_id: &UserId, listing_id: Option<&ListingId>) -> bool {
        &self.other_participant.id == recipient_id && self.listing_id() == listing_id
    }
}

impl Participant {
    pub fn full_name(&self) -> String {
        match (self.name.trim(), self.surname.trim()) {
            ("", "") => self.id.to_string(),
            (name, "") => name.to_string(),
            ("", surname) => surname.to_string(),
            (name, surname) => format!("{} {}", name, surname),
        }
    }
}
