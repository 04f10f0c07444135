//! WebSocket transport for the client.
//!
//! Provides [`Connection`] which handles WebSocket I/O for message transport.
//! This is a thin layer that just sends/receives frames - presentation and
//! command logic remain in the Sans-IO [`murmur_app::App`].
//!
//! # Receive loop
//!
//! A spawned task reads one frame at a time for the life of the connection:
//!
//! - A chat message is decoded and forwarded as
//!   [`AppEvent::MessageReceived`].
//! - A frame that fails to decode, a read error, or a close ends the loop. A
//!   final [`AppEvent::ConnectionLost`] tells the UI it will receive nothing
//!   further. There is no retry.
//!
//! The loop has no stop signal of its own: it ends when a read fails, when
//! the event channel is closed, or when [`Connection::stop`] aborts it.

use std::time::Duration;

use futures::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use murmur_app::AppEvent;
use murmur_proto::ChatMessage;
use thiserror::Error;
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, Message},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Dial or WebSocket handshake failed.
    #[error("failed to connect to {url}: {source}")]
    Connection {
        /// Target URL.
        url: String,
        /// Underlying WebSocket error.
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// Dial did not complete within the configured timeout.
    #[error("timed out connecting to {url} after {after:?}")]
    Timeout {
        /// Target URL.
        url: String,
        /// Configured connect timeout.
        after: Duration,
    },

    /// Writing a frame failed.
    #[error("stream error: {0}")]
    Stream(#[source] Box<tungstenite::Error>),
}

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound on dial plus handshake.
    pub connect_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { connect_timeout: Duration::from_secs(10) }
    }
}

/// Handle to an open WebSocket connection.
///
/// Frames are sent through [`Connection::send`]; inbound frames are pushed
/// into the event channel given to [`connect`] by an internal task.
pub struct Connection {
    sink: SplitSink<WsStream, Message>,
    receiver: JoinHandle<()>,
}

impl Connection {
    /// Send one encoded message as a single text frame.
    pub async fn send(&mut self, frame: String) -> Result<(), TransportError> {
        self.sink.send(Message::text(frame)).await.map_err(|e| TransportError::Stream(Box::new(e)))
    }

    /// Whether the receive loop is still running.
    pub fn is_receiving(&self) -> bool {
        !self.receiver.is_finished()
    }

    /// Stop the receive loop.
    pub fn stop(&self) {
        self.receiver.abort();
    }
}

/// Connect to a chat server with the default configuration.
pub async fn connect(
    url: &str,
    events: mpsc::Sender<AppEvent>,
) -> Result<Connection, TransportError> {
    connect_with_config(url, events, TransportConfig::default()).await
}

/// Connect to a chat server.
///
/// On success the receive loop is already running and will inject inbound
/// messages into `events`.
pub async fn connect_with_config(
    url: &str,
    events: mpsc::Sender<AppEvent>,
    config: TransportConfig,
) -> Result<Connection, TransportError> {
    let (stream, _response) = tokio::time::timeout(config.connect_timeout, connect_async(url))
        .await
        .map_err(|_| TransportError::Timeout { url: url.to_string(), after: config.connect_timeout })?
        .map_err(|e| TransportError::Connection { url: url.to_string(), source: Box::new(e) })?;

    tracing::info!(%url, "connected");

    let (sink, source) = stream.split();
    let receiver = tokio::spawn(receive_loop(source, events));

    Ok(Connection { sink, receiver })
}

/// Read frames until the connection fails, then report why.
async fn receive_loop(mut source: SplitStream<WsStream>, events: mpsc::Sender<AppEvent>) {
    let reason = loop {
        let message = match source.next().await {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                tracing::warn!("read: {e}");
                break format!("read failed: {e}");
            },
            None => {
                tracing::warn!("read: stream ended");
                break "connection closed".to_string();
            },
        };

        let decoded = match &message {
            Message::Text(text) => ChatMessage::decode(text.as_bytes()),
            Message::Binary(bytes) => ChatMessage::decode(bytes),
            Message::Close(frame) => {
                tracing::warn!(?frame, "server closed the connection");
                break "connection closed by server".to_string();
            },
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
        };

        match decoded {
            Ok(chat) => {
                if events.send(AppEvent::MessageReceived(chat)).await.is_err() {
                    // Event loop is gone
                    return;
                }
            },
            Err(e) => {
                tracing::error!("{e}");
                break e.to_string();
            },
        }
    };

    let _ = events.send(AppEvent::ConnectionLost { reason }).await;
}
