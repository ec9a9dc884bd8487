// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, HashSet};

use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::conversations::utils::{dedup_conversations, dedup_messages};
use crate::domain::inbox::models::{BootstrapState, InboxAction};
use crate::domain::shared::models::{ConversationId, UserId};

/// The complete view-state of the inbox.
///
/// `conversations` and `messages` hold what the server returned, duplicates included. Views
/// should render the projections returned by `conversations()` and `messages()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InboxState {
    pub conversations: Vec<Conversation>,
    pub conversations_loaded: bool,
    pub is_loading_conversations: bool,

    pub selected_conversation_id: Option<ConversationId>,
    pub messages: Vec<Message>,
    /// The highest page of the selected thread loaded so far. 0 if nothing was loaded.
    pub thread_page: u32,
    pub has_more_messages: bool,
    pub is_loading_messages: bool,

    pub unread_count: u32,

    pub bootstrap: BootstrapState,
    pub is_starting_conversation: bool,
    pub starting_notice: Option<String>,
    pub starting_notice_generation: u64,

    pub online_users: HashSet<UserId>,
    pub composing_users: HashMap<ConversationId, HashSet<UserId>>,

    pub composer_input: String,
    pub error: Option<String>,
}

impl InboxState {
    /// Deduplicated conversations, newest first.
    pub fn conversations(&self) -> Vec<Conversation> {
        dedup_conversations(&self.conversations)
    }

    /// Deduplicated messages of the selected thread in arrival order.
    pub fn messages(&self) -> Vec<Message> {
        dedup_messages(&self.messages)
    }

    /// The selected conversation if it is still part of the loaded list.
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let selected_id = self.selected_conversation_id.as_ref()?;
        self.conversations.iter().find(|c| &c.id == selected_id)
    }

    pub fn is_user_online(&self, user_id: &UserId) -> bool {
        self.online_users.contains(user_id)
    }

    pub fn composing_users(&self, conversation_id: &ConversationId) -> Vec<UserId> {
        let mut users = self
            .composing_users
            .get(conversation_id)
            .map(|users| users.iter().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        users.sort();
        users
    }
}

impl InboxState {
    /// Applies `action` and returns whether anything changed.
    pub fn reduce(&mut self, action: InboxAction) -> bool {
        match action {
            InboxAction::ConversationsRequested => {
                replace(&mut self.is_loading_conversations, true)
            }
            InboxAction::ConversationsLoaded(conversations) => {
                self.conversations = conversations;
                self.conversations_loaded = true;
                self.is_loading_conversations = false;
                true
            }
            InboxAction::ConversationsRequestFailed(error) => {
                self.is_loading_conversations = false;
                self.error = Some(error);
                true
            }
            InboxAction::ConversationUpserted(conversation) => {
                match self.conversations.iter_mut().find(|c| c.id == conversation.id) {
                    Some(existing) if *existing == conversation => return false,
                    Some(existing) => *existing = conversation,
                    None => self.conversations.push(conversation),
                }
                true
            }
            InboxAction::ConversationPreviewUpdated {
                conversation_id,
                last_message,
                timestamp,
            } => {
                let mut changed = false;
                for conversation in self
                    .conversations
                    .iter_mut()
                    .filter(|c| c.id == conversation_id)
                {
                    conversation.last_message = last_message.clone();
                    conversation.timestamp = timestamp;
                    changed = true;
                }
                changed
            }
            InboxAction::ConversationMarkedRead(conversation_id) => {
                let mut changed = false;
                for conversation in self
                    .conversations
                    .iter_mut()
                    .filter(|c| c.id == conversation_id && c.unread_count > 0)
                {
                    conversation.unread_count = 0;
                    changed = true;
                }
                changed
            }
            InboxAction::ConversationSelected(conversation_id) => {
                if self.selected_conversation_id == conversation_id {
                    return false;
                }
                self.selected_conversation_id = conversation_id;
                self.messages.clear();
                self.thread_page = 0;
                self.has_more_messages = false;
                self.is_loading_messages = false;
                true
            }
            InboxAction::MessagesRequested(conversation_id) => {
                if !self.is_selected(&conversation_id) {
                    return false;
                }
                replace(&mut self.is_loading_messages, true)
            }
            InboxAction::MessagesLoaded {
                conversation_id,
                page,
                limit,
                messages,
            } => {
                // A response for a thread that is no longer open must not overwrite the
                // current one.
                if !self.is_selected(&conversation_id) {
                    return false;
                }
                self.apply_messages_page(page, limit, messages);
                true
            }
            InboxAction::MessagesRequestFailed {
                conversation_id,
                error,
            } => {
                if self.is_selected(&conversation_id) {
                    self.is_loading_messages = false;
                }
                self.error = Some(error);
                true
            }
            InboxAction::UnreadCountLoaded(count) => replace(&mut self.unread_count, count),
            InboxAction::BootstrapStarted(intent) => self.bootstrap.begin(intent),
            InboxAction::BootstrapCreating { notice } => {
                if !self.bootstrap.create() {
                    return false;
                }
                self.is_starting_conversation = true;
                self.starting_notice = Some(notice);
                self.starting_notice_generation += 1;
                true
            }
            InboxAction::BootstrapResolved(conversation_id) => {
                if !self.bootstrap.resolve(conversation_id) {
                    return false;
                }
                self.is_starting_conversation = false;
                self.starting_notice = None;
                true
            }
            InboxAction::BootstrapFailed(error) => {
                if !self.bootstrap.fail(error.clone()) {
                    return false;
                }
                self.is_starting_conversation = false;
                self.starting_notice = None;
                self.error = Some(error);
                true
            }
            InboxAction::BootstrapReset => {
                self.bootstrap.reset()
                    | replace(&mut self.is_starting_conversation, false)
                    | self.starting_notice.take().is_some()
            }
            InboxAction::StartingNoticeExpired { generation } => {
                if generation != self.starting_notice_generation {
                    return false;
                }
                self.starting_notice.take().is_some()
            }
            InboxAction::UserPresenceChanged { user_id, is_online } => {
                if is_online {
                    self.online_users.insert(user_id)
                } else {
                    self.online_users.remove(&user_id)
                }
            }
            InboxAction::UserComposingChanged {
                conversation_id,
                user_id,
                is_composing,
            } => {
                if is_composing {
                    return self
                        .composing_users
                        .entry(conversation_id)
                        .or_default()
                        .insert(user_id);
                }

                let Some(users) = self.composing_users.get_mut(&conversation_id) else {
                    return false;
                };
                let changed = users.remove(&user_id);
                if users.is_empty() {
                    self.composing_users.remove(&conversation_id);
                }
                changed
            }
            InboxAction::ComposerInputChanged(input) => replace(&mut self.composer_input, input),
            InboxAction::MessageSubmitted => replace(&mut self.composer_input, String::new()),
            InboxAction::MessageSendFailed { content, error } => {
                self.composer_input = content;
                self.error = Some(error);
                true
            }
            InboxAction::ErrorDismissed => self.error.take().is_some(),
        }
    }

    fn is_selected(&self, conversation_id: &ConversationId) -> bool {
        self.selected_conversation_id.as_ref() == Some(conversation_id)
    }

    fn apply_messages_page(&mut self, page: u32, limit: u32, messages: Vec<Message>) {
        self.is_loading_messages = false;
        let page = page.max(1);

        if page > 1 {
            // Older messages go in front of what we have.
            self.has_more_messages = limit > 0 && messages.len() as u32 >= limit;
            let mut merged = messages;
            merged.append(&mut self.messages);
            self.messages = merged;
            self.thread_page = self.thread_page.max(page);
            return;
        }

        // Reloading the first page keeps older pages that were loaded before, as long as they
        // predate the refreshed messages.
        if self.thread_page > 1 {
            if let Some(first) = messages.first() {
                let fresh_ids = messages.iter().map(|m| &m.id).collect::<HashSet<_>>();
                let older = self
                    .messages
                    .iter()
                    .filter(|m| m.timestamp < first.timestamp && !fresh_ids.contains(&m.id))
                    .cloned()
                    .collect::<Vec<_>>();
                self.messages = older.into_iter().chain(messages).collect();
                return;
            }
        }

        self.has_more_messages = limit > 0 && messages.len() as u32 >= limit;
        self.messages = messages;
        self.thread_page = 1;
    }
}

fn replace<T: PartialEq>(target: &mut T, value: T) -> bool {
    if *target == value {
        return false;
    }
    *target = value;
    true
}
