// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod conversations;
pub mod credentials;
pub mod inbox;
pub mod realtime;
pub mod shared;
