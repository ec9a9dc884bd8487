// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info, warn};
use url::Url;

use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventCallback};
use crate::domain::realtime::services::RealtimeService;
use crate::domain::shared::models::ConversationId;
use crate::infra::realtime::frames::{encode_frame, parse_frame, OutboundEvent};

#[derive(Debug, Error)]
pub enum RealtimeError {
    #[error("Failed to connect to the realtime bridge. {0}")]
    Connect(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("The token cannot be sent as a header.")]
    InvalidToken,
    #[error("The realtime connection was closed.")]
    ConnectionClosed,
    #[error("Failed to encode frame. {0}")]
    Encode(#[from] serde_json::Error),
}

/// Realtime bridge over a WebSocket carrying JSON frames.
///
/// Inbound frames are parsed into `ServerEvent`s and passed to the callback one at a time, in
/// the order they arrived.
pub struct WebSocketRealtimeService {
    socket_url: Url,
    event_callback: ServerEventCallback,
    connection: Mutex<Option<Connection>>,
}

struct Connection {
    sender: mpsc::UnboundedSender<WsMessage>,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl WebSocketRealtimeService {
    pub fn new(socket_url: Url, event_callback: ServerEventCallback) -> Self {
        Self {
            socket_url,
            event_callback,
            connection: Default::default(),
        }
    }

    fn emit(&self, event: OutboundEvent, conversation_id: &ConversationId) -> Result<()> {
        let connection = self.connection.lock();

        let Some(connection) = connection.as_ref() else {
            debug!("Not sending {} since the socket is not connected.", event);
            return Ok(());
        };

        let frame = encode_frame(event, conversation_id).map_err(RealtimeError::from)?;
        connection
            .sender
            .send(WsMessage::text(frame))
            .map_err(|_| RealtimeError::ConnectionClosed)?;

        Ok(())
    }
}

#[async_trait]
impl RealtimeService for WebSocketRealtimeService {
    async fn connect(&self, token: Option<Secret<String>>) -> Result<()> {
        let Some(token) = token else {
            warn!("Not connecting to the realtime bridge without a token.");
            return Ok(());
        };

        self.disconnect().await;

        let mut request = self
            .socket_url
            .as_str()
            .into_client_request()
            .map_err(RealtimeError::from)?;
        let authorization = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| RealtimeError::InvalidToken)?;
        request.headers_mut().insert(AUTHORIZATION, authorization);

        info!("Connecting to {}…", self.socket_url);
        let (stream, _) = connect_async(request)
            .await
            .map_err(RealtimeError::from)?;
        let (mut sink, mut stream) = stream.split();

        let (sender, mut outbox) = mpsc::unbounded_channel::<WsMessage>();
        let writer = tokio::spawn(async move {
            while let Some(message) = outbox.recv().await {
                if let Err(err) = sink.send(message).await {
                    warn!("Failed to write to socket. {}", err);
                    break;
                }
            }
            _ = sink.close().await;
        });

        // The reader waits until the connection is stored so that handlers reacting to
        // `Connected` can already emit frames.
        let (ready_tx, ready_rx) = oneshot::channel::<()>();
        let event_callback = self.event_callback.clone();
        let reader = tokio::spawn(async move {
            if ready_rx.await.is_err() {
                return;
            }

            event_callback(ServerEvent::Connection(ConnectionEvent::Connected)).await;

            let mut error = None;
            while let Some(frame) = stream.next().await {
                match frame {
                    Ok(WsMessage::Text(text)) => match parse_frame(text.as_str()) {
                        Ok(Some(event)) => event_callback(event).await,
                        Ok(None) => debug!("Ignoring frame {}", text.as_str()),
                        Err(err) => warn!("Failed to parse frame. {}", err),
                    },
                    Ok(WsMessage::Close(_)) => break,
                    Ok(_) => (),
                    Err(err) => {
                        error = Some(err.to_string());
                        break;
                    }
                }
            }

            event_callback(ServerEvent::Connection(ConnectionEvent::Disconnected {
                error,
            }))
            .await;
        });

        self.connection.lock().replace(Connection {
            sender,
            reader,
            writer,
        });
        _ = ready_tx.send(());

        Ok(())
    }

    async fn disconnect(&self) {
        let Some(connection) = self.connection.lock().take() else {
            return;
        };

        info!("Disconnecting from realtime bridge.");
        connection.reader.abort();
        // Dropping the sender lets the writer flush and close the socket.
        drop(connection.sender);
        _ = connection.writer.await;
    }

    async fn join_conversation(&self, conversation_id: &ConversationId) -> Result<()> {
        self.emit(OutboundEvent::JoinConversation, conversation_id)
    }

    async fn leave_conversation(&self, conversation_id: &ConversationId) -> Result<()> {
        self.emit(OutboundEvent::LeaveConversation, conversation_id)
    }

    async fn start_typing(&self, conversation_id: &ConversationId) -> Result<()> {
        self.emit(OutboundEvent::StartTyping, conversation_id)
    }

    async fn stop_typing(&self, conversation_id: &ConversationId) -> Result<()> {
        self.emit(OutboundEvent::StopTyping, conversation_id)
    }
}
