// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;

use crate::domain::shared::models::ConversationId;

/// Tracks whether we announced that the local user is typing and in which conversation.
///
/// Every keystroke bumps a generation. A quiet-period timer carrying an older generation is
/// outdated and must not stop the indicator.
#[derive(Debug, Default)]
pub struct TypingIndicator {
    inner: Mutex<TypingIndicatorInner>,
}

#[derive(Debug, Default)]
struct TypingIndicatorInner {
    active_conversation: Option<ConversationId>,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keystroke {
    /// True if the indicator went from idle to typing with this keystroke.
    pub started: bool,
    /// The generation to pass to `expire` once the quiet period elapsed.
    pub generation: u64,
    /// The conversation we were typing in before, if it differs from the current one.
    pub abandoned_conversation: Option<ConversationId>,
}

impl TypingIndicator {
    pub fn keystroke(&self, conversation_id: &ConversationId) -> Keystroke {
        let mut inner = self.inner.lock();
        inner.generation += 1;

        let abandoned_conversation = match inner.active_conversation.take() {
            Some(active) if &active == conversation_id => {
                inner.active_conversation = Some(active);
                return Keystroke {
                    started: false,
                    generation: inner.generation,
                    abandoned_conversation: None,
                };
            }
            other => other,
        };

        inner.active_conversation = Some(conversation_id.clone());
        Keystroke {
            started: true,
            generation: inner.generation,
            abandoned_conversation,
        }
    }

    /// Returns the conversation to stop typing in if `generation` is still current.
    pub fn expire(&self, generation: u64) -> Option<ConversationId> {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            return None;
        }
        inner.active_conversation.take()
    }

    /// Returns the conversation to stop typing in, if any.
    pub fn reset(&self) -> Option<ConversationId> {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.active_conversation.take()
    }

    pub fn is_typing(&self) -> bool {
        self.inner.lock().active_conversation.is_some()
    }
}
