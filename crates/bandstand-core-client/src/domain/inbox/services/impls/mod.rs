// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bootstrap_domain_service::{BootstrapDomainService, BootstrapDomainServiceDependencies};
pub use inbox_domain_service::{InboxDomainService, InboxDomainServiceDependencies};

mod bootstrap_domain_service;
mod inbox_domain_service;

/// Formats `error` as the user-facing message for a failed `operation`.
pub(crate) fn failure_message(operation: &str, error: &anyhow::Error) -> String {
    format!("Failed to {}. {}", operation, error)
}
