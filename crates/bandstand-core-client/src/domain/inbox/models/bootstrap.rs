// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::inbox::models::NavigationParams;
use crate::domain::shared::models::{ConversationId, ListingId, UserId};

/// What the inbox should show after it was navigated to. Derived from `NavigationParams` once
/// per mount.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapIntent {
    /// Open an existing conversation.
    Direct(ConversationId),
    /// Open the conversation with `recipient_id` (about `listing_id`), creating it if needed.
    StartNew {
        recipient_id: UserId,
        listing_id: Option<ListingId>,
    },
    /// Nothing to open.
    None,
}

impl From<&NavigationParams> for BootstrapIntent {
    fn from(params: &NavigationParams) -> Self {
        if let Some(conversation_id) = &params.conversation_id {
            return Self::Direct(conversation_id.clone());
        }

        if let Some(recipient_id) = &params.recipient_id {
            return Self::StartNew {
                recipient_id: recipient_id.clone(),
                listing_id: params.listing_id.clone(),
            };
        }

        Self::None
    }
}

/// Lifecycle of the one-time bootstrap.
///
/// ```text
/// Idle ──begin──▶ Resolving ──resolve──▶ Selected
///                     │                     ▲
///                     └─create──▶ Creating ─┤
///                                     └─fail──▶ Failed
/// ```
///
/// Every state except `Idle` counts as "processed". Only `reset` (on unmount) returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BootstrapState {
    #[default]
    Idle,
    Resolving(BootstrapIntent),
    Creating {
        recipient_id: UserId,
        listing_id: Option<ListingId>,
    },
    Selected(Option<ConversationId>),
    Failed(String),
}

impl BootstrapState {
    pub fn is_processed(&self) -> bool {
        *self != Self::Idle
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Resolving(_) | Self::Creating { .. })
    }

    /// Moves from `Idle` to `Resolving`. Returns false (and changes nothing) if the bootstrap
    /// was processed already.
    pub fn begin(&mut self, intent: BootstrapIntent) -> bool {
        if self.is_processed() {
            return false;
        }
        *self = Self::Resolving(intent);
        true
    }

    /// Moves from `Resolving(StartNew)` to `Creating`.
    pub fn create(&mut self) -> bool {
        let Self::Resolving(BootstrapIntent::StartNew {
            recipient_id,
            listing_id,
        }) = self
        else {
            return false;
        };

        *self = Self::Creating {
            recipient_id: recipient_id.clone(),
            listing_id: listing_id.clone(),
        };
        true
    }

    /// Moves from `Resolving` or `Creating` to `Selected`. A resolution arriving in any other
    /// state is stale and ignored.
    pub fn resolve(&mut self, conversation_id: Option<ConversationId>) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = Self::Selected(conversation_id);
        true
    }

    /// Moves from `Resolving` or `Creating` to `Failed`.
    pub fn fail(&mut self, error: impl Into<String>) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = Self::Failed(error.into());
        true
    }

    pub fn reset(&mut self) -> bool {
        if *self == Self::Idle {
            return false;
        }
        *self = Self::Idle;
        true
    }
}
