// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppContext, AppDependencies, DynBootstrapDomainService, DynClientEventDispatcher,
    DynConversationsService, DynCredentialsRepository, DynInboxDomainService, DynInboxStore,
    DynRealtimeService,
};
use crate::domain::inbox::services::impls::{
    BootstrapDomainService, BootstrapDomainServiceDependencies, InboxDomainService,
    InboxDomainServiceDependencies,
};
use crate::infra::inbox::InMemoryInboxStore;

/// The platform-specific pieces from which the rest of the dependency graph is derived.
pub struct PlatformDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversations_service: DynConversationsService,
    pub credentials_repo: DynCredentialsRepository,
    pub ctx: AppContext,
    pub realtime_service: DynRealtimeService,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let ctx = Arc::new(d.ctx);

        let inbox_store: DynInboxStore =
            Arc::new(InMemoryInboxStore::new(d.client_event_dispatcher.clone()));

        let inbox_domain_service: DynInboxDomainService = Arc::new(InboxDomainService::from(
            InboxDomainServiceDependencies {
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                conversations_service: d.conversations_service.clone(),
                ctx: ctx.clone(),
                inbox_store: inbox_store.clone(),
                realtime_service: d.realtime_service.clone(),
            },
        ));

        let bootstrap_domain_service: DynBootstrapDomainService =
            Arc::new(BootstrapDomainService::from(
                BootstrapDomainServiceDependencies {
                    conversations_service: d.conversations_service.clone(),
                    ctx: ctx.clone(),
                    inbox_domain_service: inbox_domain_service.clone(),
                    inbox_store: inbox_store.clone(),
                },
            ));

        Self {
            bootstrap_domain_service,
            client_event_dispatcher: d.client_event_dispatcher,
            conversations_service: d.conversations_service,
            credentials_repo: d.credentials_repo,
            ctx,
            inbox_domain_service,
            inbox_store,
            realtime_service: d.realtime_service,
        }
    }
}
