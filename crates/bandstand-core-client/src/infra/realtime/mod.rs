// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use websocket_realtime_service::{RealtimeError, WebSocketRealtimeService};

mod frames;
mod websocket_realtime_service;
