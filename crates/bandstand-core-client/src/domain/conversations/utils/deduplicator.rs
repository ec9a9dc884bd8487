// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;

use crate::domain::conversations::models::{Conversation, Message};

/// Collapses conversations sharing the same identity and orders the result for display.
///
/// The first occurrence of each identity (in the order of `conversations`) survives, later ones
/// are dropped. The survivors are then sorted by `timestamp`, newest first. The sort is stable,
/// so entries with equal timestamps keep their relative order.
pub fn dedup_conversations(conversations: &[Conversation]) -> Vec<Conversation> {
    let mut unique = conversations
        .iter()
        .unique_by(|conversation| conversation.identity())
        .cloned()
        .collect::<Vec<_>>();
    unique.sort_by(|lhs, rhs| rhs.timestamp.cmp(&lhs.timestamp));
    unique
}

/// Drops messages whose id was seen earlier in `messages`. Arrival order is preserved.
pub fn dedup_messages(messages: &[Message]) -> Vec<Message> {
    messages
        .iter()
        .unique_by(|message| message.id.clone())
        .cloned()
        .collect()
}
