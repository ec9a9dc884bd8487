// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use inbox_store::InboxStore;

mod inbox_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::inbox_store::MockInboxStore;
}
