// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use credentials_repository::CredentialsRepository;

mod credentials_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::credentials_repository::MockCredentialsRepository;
}
