// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::inbox::models::NavigationParams;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BootstrapDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Opens the conversation described by `params`. Runs at most once until `reset` is called,
    /// no matter how often it is invoked or how the conversation list changes in the meantime.
    ///
    /// - With a conversation id that conversation is selected.
    /// - With a recipient the matching conversation of the loaded list is selected, or a new one
    ///   is created on the server, inserted into the list and selected.
    /// - Without either nothing is selected.
    async fn resolve(&self, params: &NavigationParams) -> Result<()>;

    /// Allows the next `resolve` to run again. A conversation that is still being created when
    /// this is called will not be selected.
    fn reset(&self);
}
