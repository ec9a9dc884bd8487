// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::shared::models::{ConversationId, ListingId, UserId};

/// The read-only parameters the inbox was navigated with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationParams {
    pub conversation_id: Option<ConversationId>,
    pub recipient_id: Option<UserId>,
    pub recipient_name: Option<String>,
    pub listing_id: Option<ListingId>,
    pub listing_title: Option<String>,
}

impl NavigationParams {
    /// Reads the parameters from the query of `url`, e.g.
    /// `/messages?recipientId=u1&recipientName=Jane&listingId=l1`. Empty values are ignored.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();

        for (key, value) in url.query_pairs() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "conversationId" => params.conversation_id = Some(value.into()),
                "recipientId" => params.recipient_id = Some(value.into()),
                "recipientName" => params.recipient_name = Some(value.to_string()),
                "listingId" => params.listing_id = Some(value.into()),
                "listingTitle" => params.listing_title = Some(value.to_string()),
                _ => (),
            }
        }

        params
    }

    /// The text shown while a conversation is being created on behalf of these parameters.
    pub fn starting_notice(&self) -> String {
        let recipient = self.recipient_name.as_deref().unwrap_or("the seller");
        match &self.listing_title {
            Some(title) => format!(
                "Starting conversation with {} about \"{}\"…",
                recipient, title
            ),
            None => format!("Starting conversation with {}…", recipient),
        }
    }
}
