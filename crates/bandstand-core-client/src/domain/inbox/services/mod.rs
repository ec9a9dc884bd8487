// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bootstrap_domain_service::BootstrapDomainService;
pub use inbox_domain_service::InboxDomainService;

mod bootstrap_domain_service;
pub mod impls;
mod inbox_domain_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::bootstrap_domain_service::MockBootstrapDomainService;
    pub use super::inbox_domain_service::MockInboxDomainService;
}
