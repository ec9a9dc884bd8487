// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

use bandstand_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

/// Local store for the bearer token used to authenticate REST and socket calls.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait CredentialsRepository: SendUnlessWasm + SyncUnlessWasm {
    fn token(&self) -> Option<Secret<String>>;
    fn set_token(&self, token: Secret<String>);
    fn clear(&self);
}
