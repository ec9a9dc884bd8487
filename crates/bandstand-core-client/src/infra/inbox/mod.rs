// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_inbox_store::InMemoryInboxStore;

mod in_memory_inbox_store;
