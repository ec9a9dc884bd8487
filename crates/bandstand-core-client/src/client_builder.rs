// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use url::Url;

use bandstand_wasm_utils::{BandstandFutureExt, PinnedFuture};

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynConversationsService, DynCredentialsRepository,
    DynRealtimeService,
};
use crate::app::event_handlers::{
    ConnectionEventHandler, MessagesEventHandler, PresenceEventHandler, ServerEvent,
    ServerEventCallback, ServerEventHandlerQueue,
};
use crate::app::services::{ComposerService, ConnectionService, InboxService};
use crate::client::ClientInner;
use crate::domain::conversations::services::ConversationsService;
use crate::domain::credentials::repos::CredentialsRepository;
use crate::domain::realtime::services::RealtimeService;
use crate::infra::api::RestConversationsService;
use crate::infra::credentials::InMemoryCredentialsRepository;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::{Client, ClientDelegate};

pub struct UndefinedConversationsService;
pub struct UndefinedRealtimeService;

/// Creates the REST side once the credentials repository is known.
pub struct ConversationsServiceProvider(
    Box<dyn FnOnce(DynCredentialsRepository) -> DynConversationsService>,
);

/// Creates the realtime side once the callback receiving its inbound events exists.
pub struct RealtimeServiceProvider(Box<dyn FnOnce(ServerEventCallback) -> DynRealtimeService>);

pub struct ClientBuilder<C, R> {
    app_config: AppConfig,
    conversations_service: C,
    credentials_repo: DynCredentialsRepository,
    delegate: Option<Box<dyn ClientDelegate>>,
    realtime_service: R,
}

impl ClientBuilder<UndefinedConversationsService, UndefinedRealtimeService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            conversations_service: UndefinedConversationsService,
            credentials_repo: Arc::new(InMemoryCredentialsRepository::new()),
            delegate: None,
            realtime_service: UndefinedRealtimeService,
        }
    }
}

impl<R> ClientBuilder<UndefinedConversationsService, R> {
    /// Talks to the marketplace REST API below `api_url`.
    pub fn set_api_url(self, api_url: Url) -> ClientBuilder<ConversationsServiceProvider, R> {
        self.with_conversations_service_provider(ConversationsServiceProvider(Box::new(
            move |credentials_repo| {
                Arc::new(RestConversationsService::new(api_url, credentials_repo))
            },
        )))
    }

    pub fn set_conversations_service<S: ConversationsService + 'static>(
        self,
        service: S,
    ) -> ClientBuilder<ConversationsServiceProvider, R> {
        let service: DynConversationsService = Arc::new(service);
        self.with_conversations_service_provider(ConversationsServiceProvider(Box::new(
            move |_| service,
        )))
    }

    fn with_conversations_service_provider(
        self,
        conversations_service: ConversationsServiceProvider,
    ) -> ClientBuilder<ConversationsServiceProvider, R> {
        ClientBuilder {
            app_config: self.app_config,
            conversations_service,
            credentials_repo: self.credentials_repo,
            delegate: self.delegate,
            realtime_service: self.realtime_service,
        }
    }
}

impl<C> ClientBuilder<C, UndefinedRealtimeService> {
    /// Connects to the realtime bridge at `socket_url`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn set_socket_url(self, socket_url: Url) -> ClientBuilder<C, RealtimeServiceProvider> {
        use crate::infra::realtime::WebSocketRealtimeService;

        self.set_realtime_service_provider(move |event_callback| {
            WebSocketRealtimeService::new(socket_url, event_callback)
        })
    }

    /// Uses the realtime service returned by `provider`.
    ///
    /// `provider` receives the callback through which the service must deliver every inbound
    /// event (new messages, presence, typing and connection changes).
    pub fn set_realtime_service_provider<S, F>(
        self,
        provider: F,
    ) -> ClientBuilder<C, RealtimeServiceProvider>
    where
        S: RealtimeService + 'static,
        F: FnOnce(ServerEventCallback) -> S + 'static,
    {
        ClientBuilder {
            app_config: self.app_config,
            conversations_service: self.conversations_service,
            credentials_repo: self.credentials_repo,
            delegate: self.delegate,
            realtime_service: RealtimeServiceProvider(Box::new(move |event_callback| {
                Arc::new(provider(event_callback))
            })),
        }
    }
}

impl<C, R> ClientBuilder<C, R> {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_credentials_repository<T: CredentialsRepository + 'static>(
        mut self,
        credentials_repo: T,
    ) -> Self {
        self.credentials_repo = Arc::new(credentials_repo);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<ConversationsServiceProvider, RealtimeServiceProvider> {
    pub fn build(self) -> Client {
        let server_event_handler_queue = Arc::new(ServerEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let event_callback: ServerEventCallback = {
            let queue = server_event_handler_queue.clone();
            Arc::new(move |event: ServerEvent| -> PinnedFuture<()> {
                let queue = queue.clone();
                async move { queue.handle_event(event).await }.pinned()
            })
        };

        let conversations_service = (self.conversations_service.0)(self.credentials_repo.clone());
        let realtime_service = (self.realtime_service.0)(event_callback);

        let dependencies: AppDependencies = PlatformDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            conversations_service,
            credentials_repo: self.credentials_repo,
            ctx: AppContext::new(self.app_config),
            realtime_service,
        }
        .into();

        server_event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(PresenceEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            composer: ComposerService::from(&dependencies),
            connection: ConnectionService::from(&dependencies),
            credentials_repo: dependencies.credentials_repo.clone(),
            ctx: dependencies.ctx.clone(),
            inbox: InboxService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
