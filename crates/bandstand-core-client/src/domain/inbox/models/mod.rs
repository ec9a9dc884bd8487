// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bootstrap::{BootstrapIntent, BootstrapState};
pub use inbox_action::InboxAction;
pub use inbox_state::InboxState;
pub use navigation_params::NavigationParams;
pub use typing_indicator::{Keystroke, TypingIndicator};

mod bootstrap;
mod inbox_action;
mod inbox_state;
mod navigation_params;
mod typing_indicator;
