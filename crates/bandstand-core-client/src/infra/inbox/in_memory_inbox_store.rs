// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use tracing::trace;

use crate::app::deps::DynClientEventDispatcher;
use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::inbox::models::{InboxAction, InboxState};
use crate::domain::inbox::repos::InboxStore;
use crate::domain::shared::models::{ConversationId, UserId};

/// Serializes every mutation of the inbox through one lock and notifies the client afterwards.
pub struct InMemoryInboxStore {
    state: RwLock<InboxState>,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl InMemoryInboxStore {
    pub fn new(client_event_dispatcher: DynClientEventDispatcher) -> Self {
        Self::with_state(InboxState::default(), client_event_dispatcher)
    }

    pub fn with_state(
        state: InboxState,
        client_event_dispatcher: DynClientEventDispatcher,
    ) -> Self {
        Self {
            state: RwLock::new(state),
            client_event_dispatcher,
        }
    }
}

impl InboxStore for InMemoryInboxStore {
    fn dispatch(&self, action: InboxAction) -> bool {
        let events = action.client_events();

        trace!("Dispatching {:?}", action);
        let changed = self.state.write().reduce(action);

        // The lock is released at this point so that delegates may read the state.
        if changed {
            for event in events {
                self.client_event_dispatcher.dispatch_event(event);
            }
        }

        changed
    }

    fn snapshot(&self) -> InboxState {
        self.state.read().clone()
    }

    fn selected_conversation_id(&self) -> Option<ConversationId> {
        self.state.read().selected_conversation_id.clone()
    }

    fn selected_conversation(&self) -> Option<Conversation> {
        self.state.read().selected_conversation().cloned()
    }

    fn conversations(&self) -> Vec<Conversation> {
        self.state.read().conversations()
    }

    fn messages(&self) -> Vec<Message> {
        self.state.read().messages()
    }

    fn is_user_online(&self, user_id: &UserId) -> bool {
        self.state.read().is_user_online(user_id)
    }

    fn composing_users(&self, conversation_id: &ConversationId) -> Vec<UserId> {
        self.state.read().composing_users(conversation_id)
    }

    fn unread_count(&self) -> u32 {
        self.state.read().unread_count
    }

    fn composer_input(&self) -> String {
        self.state.read().composer_input.clone()
    }
}
