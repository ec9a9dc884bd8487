// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use composer_service::ComposerService;
pub use connection_service::ConnectionService;
pub use inbox_service::InboxService;

mod composer_service;
mod connection_service;
mod inbox_service;
