// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use realtime_service::RealtimeService;

mod realtime_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::realtime_service::MockRealtimeService;
}
