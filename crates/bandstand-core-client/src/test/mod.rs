// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_builder::ConversationBuilder;
pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::{
    MockAppDependencies, MockBootstrapDomainServiceDependencies,
    MockInboxDomainServiceDependencies,
};


pub mod mock_data {
    use std::time::Duration;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::app::deps::AppConfig;
    use crate::domain::shared::models::UserId;

    /// Short timers so that tests relying on them do not need to wait long.
    pub fn app_config() -> AppConfig {
        AppConfig {
            message_page_size: 20,
            typing_quiet_period: Duration::from_millis(50),
            starting_notice_timeout: Duration::from_millis(50),
        }
    }

    pub fn reference_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    /// The user the client is logged in as.
    pub fn account_id() -> UserId {
        UserId::from("me")
    }
}
