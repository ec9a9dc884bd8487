// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use parking_lot::RwLock;

use crate::domain::shared::models::ConnectionState;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The number of messages to request per page of a thread.
    pub message_page_size: u32,
    /// The time without keystrokes after which we announce that the user stopped typing.
    pub typing_quiet_period: Duration,
    /// How long the "starting conversation" notice is shown at most.
    pub starting_notice_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message_page_size: 50,
            typing_quiet_period: Duration::from_secs(3),
            starting_notice_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Default)]
pub struct AppContext {
    pub config: AppConfig,
    pub connection_state: RwLock<ConnectionState>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            connection_state: Default::default(),
        }
    }
}

impl AppContext {
    pub fn connection_state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    pub fn set_connection_state(&self, state: ConnectionState) {
        *self.connection_state.write() = state;
    }
}
