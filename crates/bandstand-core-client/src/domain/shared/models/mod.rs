// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_state::ConnectionState;
pub use ids::{ConversationId, ConversationKey, ListingId, MessageId, UserId};

mod connection_state;
mod ids;
