// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_service::ConversationsService;

mod conversations_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::conversations_service::MockConversationsService;
}
