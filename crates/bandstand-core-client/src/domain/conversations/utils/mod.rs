// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use deduplicator::{dedup_conversations, dedup_messages};

mod deduplicator;
