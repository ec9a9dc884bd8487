// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::conversations::models::{
    Conversation, ConversationIdentity, ListingSummary, Message, Participant,
};
pub use crate::domain::inbox::models::{
    BootstrapIntent, BootstrapState, InboxState, NavigationParams,
};
pub use crate::domain::shared::models::{
    ConnectionState, ConversationId, ConversationKey, ListingId, MessageId, UserId,
};
