// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use bandstand_proc_macros::DependenciesStruct;
use bandstand_wasm_utils::{sleep, spawn};

use crate::app::deps::{
    DynAppContext, DynConversationsService, DynInboxDomainService, DynInboxStore,
};
use crate::domain::inbox::models::{BootstrapIntent, InboxAction, NavigationParams};
use crate::domain::shared::models::{ListingId, UserId};

use super::super::BootstrapDomainService as BootstrapDomainServiceTrait;
use super::failure_message;

#[derive(DependenciesStruct)]
pub struct BootstrapDomainService {
    conversations_service: DynConversationsService,
    ctx: DynAppContext,
    inbox_domain_service: DynInboxDomainService,
    inbox_store: DynInboxStore,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl BootstrapDomainServiceTrait for BootstrapDomainService {
    #[tracing::instrument(skip(self))]
    async fn resolve(&self, params: &NavigationParams) -> Result<()> {
        let intent = BootstrapIntent::from(params);

        if !self
            .inbox_store
            .dispatch(InboxAction::BootstrapStarted(intent.clone()))
        {
            debug!("Bootstrap was processed already.");
            return Ok(());
        }

        match intent {
            BootstrapIntent::None => {
                self.inbox_store
                    .dispatch(InboxAction::BootstrapResolved(None));
                Ok(())
            }
            BootstrapIntent::Direct(conversation_id) => {
                self.inbox_store
                    .dispatch(InboxAction::BootstrapResolved(Some(conversation_id.clone())));
                self.inbox_domain_service
                    .select_conversation(Some(conversation_id))
                    .await
            }
            BootstrapIntent::StartNew {
                recipient_id,
                listing_id,
            } => {
                self.open_conversation_with(params, recipient_id, listing_id)
                    .await
            }
        }
    }

    fn reset(&self) {
        self.inbox_store.dispatch(InboxAction::BootstrapReset);
    }
}

impl BootstrapDomainService {
    async fn open_conversation_with(
        &self,
        params: &NavigationParams,
        recipient_id: UserId,
        listing_id: Option<ListingId>,
    ) -> Result<()> {
        let existing_conversation = self
            .inbox_store
            .conversations()
            .into_iter()
            .find(|c| c.matches(&recipient_id, listing_id.as_ref()));

        if let Some(conversation) = existing_conversation {
            debug!("Found existing conversation {}.", conversation.id);
            self.inbox_store
                .dispatch(InboxAction::BootstrapResolved(Some(conversation.id.clone())));
            return self
                .inbox_domain_service
                .select_conversation(Some(conversation.id))
                .await;
        }

        self.inbox_store.dispatch(InboxAction::BootstrapCreating {
            notice: params.starting_notice(),
        });
        self.schedule_starting_notice_expiry();

        info!("Starting conversation with {}…", recipient_id);

        match self
            .conversations_service
            .start_conversation(&recipient_id, listing_id)
            .await
        {
            Ok(conversation) => {
                let conversation_id = conversation.id.clone();

                if !self
                    .inbox_store
                    .dispatch(InboxAction::BootstrapResolved(Some(conversation_id.clone())))
                {
                    info!(
                        "Not selecting conversation {} since the inbox was left in the meantime.",
                        conversation_id
                    );
                    return Ok(());
                }

                self.inbox_store
                    .dispatch(InboxAction::ConversationUpserted(conversation));
                self.inbox_domain_service
                    .select_conversation(Some(conversation_id))
                    .await
            }
            Err(err) => {
                self.inbox_store
                    .dispatch(InboxAction::BootstrapFailed(failure_message(
                        "start conversation",
                        &err,
                    )));
                Err(err)
            }
        }
    }

    fn schedule_starting_notice_expiry(&self) {
        let generation = self.inbox_store.snapshot().starting_notice_generation;
        let timeout = self.ctx.config.starting_notice_timeout;
        let inbox_store = self.inbox_store.clone();

        spawn(async move {
            sleep(timeout).await;
            inbox_store.dispatch(InboxAction::StartingNoticeExpired { generation });
        });
    }
}
