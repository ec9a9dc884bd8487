// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::conversations::services::ConversationsService;
use crate::domain::credentials::repos::CredentialsRepository;
use crate::domain::inbox::repos::InboxStore;
use crate::domain::inbox::services::{BootstrapDomainService, InboxDomainService};
use crate::domain::realtime::services::RealtimeService;

pub type DynAppContext = Arc<AppContext>;
pub type DynBootstrapDomainService = Arc<dyn BootstrapDomainService>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynConversationsService = Arc<dyn ConversationsService>;
pub type DynCredentialsRepository = Arc<dyn CredentialsRepository>;
pub type DynInboxDomainService = Arc<dyn InboxDomainService>;
pub type DynInboxStore = Arc<dyn InboxStore>;
pub type DynRealtimeService = Arc<dyn RealtimeService>;

pub struct AppDependencies {
    pub bootstrap_domain_service: DynBootstrapDomainService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversations_service: DynConversationsService,
    pub credentials_repo: DynCredentialsRepository,
    pub ctx: DynAppContext,
    pub inbox_domain_service: DynInboxDomainService,
    pub inbox_store: DynInboxStore,
    pub realtime_service: DynRealtimeService,
}
