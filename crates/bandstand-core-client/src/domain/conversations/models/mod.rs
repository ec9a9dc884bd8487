// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation::{Conversation, ConversationIdentity, ListingSummary, Participant};
pub use message::Message;

mod conversation;
mod message;
