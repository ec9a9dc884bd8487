// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use bandstand_core_client::app::event_handlers::MockClientEventDispatcherTrait;
use bandstand_core_client::ClientEvent;

mod bootstrap_domain_service;
mod client;
mod composer_service;
mod connection_service;
mod event_handlers;

/// Accepts every event sent to `dispatcher` and returns them in the order they were sent.
pub(crate) fn record_events(
    dispatcher: &mut MockClientEventDispatcherTrait,
) -> Arc<Mutex<Vec<ClientEvent>>> {
    let events = Arc::new(Mutex::new(vec![]));
    {
        let events = events.clone();
        dispatcher
            .expect_dispatch_event()
            .returning(move |event| events.lock().push(event));
    }
    events
}
