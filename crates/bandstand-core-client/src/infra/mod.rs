// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod api;
pub mod credentials;
pub mod events;
pub mod inbox;
pub mod platform_dependencies;
#[cfg(not(target_arch = "wasm32"))]
pub mod realtime;
