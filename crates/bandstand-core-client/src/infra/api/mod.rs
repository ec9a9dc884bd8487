// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use request_error::RequestError;
pub use rest_conversations_service::RestConversationsService;

mod request_error;
mod rest_conversations_service;
mod wire;
