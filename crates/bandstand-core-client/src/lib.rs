// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::dtos;
pub use app::event_handlers::{
    ConnectionEvent, MessageEvent, ServerEvent, ServerEventCallback, UserStatusEvent,
    UserStatusEventType,
};
pub use app::services;
pub use client::{Client, ClientDelegate};
pub use client_builder::{
    ClientBuilder, ConversationsServiceProvider, RealtimeServiceProvider,
    UndefinedConversationsService, UndefinedRealtimeService,
};
pub use client_event::ClientEvent;
pub use domain::conversations::services::ConversationsService;
pub use domain::credentials::repos::CredentialsRepository;
pub use domain::realtime::services::RealtimeService;
pub use secrecy::Secret;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
