// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use secrecy::Secret;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::{DynAppContext, DynCredentialsRepository};
use crate::client_builder::{ClientBuilder, UndefinedConversationsService, UndefinedRealtimeService};
use crate::dtos::ConnectionState;
use crate::services::{ComposerService, ConnectionService, InboxService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedConversationsService, UndefinedRealtimeService> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub composer: ComposerService,
    pub inbox: InboxService,
    pub(crate) connection: ConnectionService,
    pub(crate) credentials_repo: DynCredentialsRepository,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Stores the bearer token used for REST requests and the realtime connection.
    pub fn set_token(&self, token: Secret<String>) {
        self.credentials_repo.set_token(token)
    }

    /// Forgets the token and closes the realtime connection.
    pub async fn clear_token(&self) {
        self.credentials_repo.clear();
        self.connection.disconnect().await
    }

    pub async fn connect(&self) -> Result<()> {
        self.connection.connect().await
    }

    pub async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }
}
