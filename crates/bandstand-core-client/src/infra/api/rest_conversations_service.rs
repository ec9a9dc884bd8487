// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::app::deps::DynCredentialsRepository;
use crate::domain::conversations::models::{Conversation, Message};
use crate::domain::conversations::services::ConversationsService;
use crate::domain::shared::models::{ConversationId, ListingId, UserId};
use crate::infra::api::wire::{
    CountEnvelope, ItemEnvelope, ListEnvelope, SendMessageRequest, StartConversationRequest,
};
use crate::infra::api::RequestError;

/// `ConversationsService` backed by the marketplace REST API.
pub struct RestConversationsService {
    http: reqwest::Client,
    base_url: Url,
    credentials_repo: DynCredentialsRepository,
}

impl RestConversationsService {
    pub fn new(base_url: Url, credentials_repo: DynCredentialsRepository) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
            credentials_repo,
        }
    }

    fn url(&self, path: &str) -> Result<Url, RequestError> {
        Ok(self.base_url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);

        match self.credentials_repo.token() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R, RequestError> {
        let response = check_status(builder.send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ConversationsService for RestConversationsService {
    #[tracing::instrument(skip(self))]
    async fn load_conversations(&self) -> Result<Vec<Conversation>> {
        let url = self.url("messages/conversations")?;
        let envelope: ListEnvelope<Conversation> = self.send(self.request(Method::GET, url)).await?;
        Ok(envelope.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn load_messages(
        &self,
        conversation_id: &ConversationId,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Message>> {
        let mut url = self.url(&format!(
            "messages/conversations/{}/messages",
            conversation_id
        ))?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());

        let envelope: ListEnvelope<Message> = self.send(self.request(Method::GET, url)).await?;
        let messages = envelope.into_inner();
        debug!("Loaded {} messages.", messages.len());
        Ok(messages)
    }

    #[tracing::instrument(skip(self, content))]
    async fn send_message(
        &self,
        conversation_id: &ConversationId,
        content: &str,
    ) -> Result<Message> {
        let url = self.url("messages/send")?;
        let request = self
            .request(Method::POST, url)
            .json(&SendMessageRequest {
                conversation_id,
                content,
            });

        let envelope: ItemEnvelope<Message> = self.send(request).await?;
        Ok(envelope.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn start_conversation(
        &self,
        recipient_id: &UserId,
        listing_id: Option<ListingId>,
    ) -> Result<Conversation> {
        let url = self.url("messages/conversations/start")?;
        let request = self
            .request(Method::POST, url)
            .json(&StartConversationRequest {
                recipient_id,
                listing_id,
            });

        let envelope: ItemEnvelope<Conversation> = self.send(request).await?;
        Ok(envelope.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn load_unread_count(&self) -> Result<u32> {
        let url = self.url("messages/unread-count")?;
        let envelope: CountEnvelope = self.send(self.request(Method::GET, url)).await?;
        Ok(envelope.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn mark_conversation_read(&self, conversation_id: &ConversationId) -> Result<()> {
        let url = self.url(&format!("messages/conversations/{}/read", conversation_id))?;
        let response = self.request(Method::PUT, url).send().await.map_err(RequestError::from)?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    let error = RequestError::Server {
        status: status.as_u16(),
        message,
    };

    if error.is_unauthorized() {
        warn!("Request was rejected as unauthorized. Is the token still valid?");
    }

    Err(error)
}

/// Relative paths are joined onto the last path segment, so the base URL needs a trailing slash
/// for `https://host/api` to resolve to `https://host/api/messages/…`.
fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
