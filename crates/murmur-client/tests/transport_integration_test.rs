//! Integration tests for client WebSocket transport.
//!
//! These tests verify the real transport layer works correctly by connecting
//! the client to an in-process WebSocket server.

use std::{future::Future, time::Duration};

use futures::{SinkExt, StreamExt};
use murmur_app::AppEvent;
use murmur_client::transport::{self, Connection, TransportConfig, TransportError};
use murmur_proto::ChatMessage;
use tokio::{
    net::{TcpListener, TcpStream},
    sync::mpsc,
    time::timeout,
};
use tokio_tungstenite::{WebSocketStream, accept_async, tungstenite::Message};

const WAIT: Duration = Duration::from_secs(5);

/// Start a one-connection server running `handler`, and return its URL.
async fn start_server<F, Fut>(handler: F) -> String
where
    F: FnOnce(WebSocketStream<TcpStream>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.unwrap();
        let ws = accept_async(tcp).await.unwrap();
        handler(ws).await;
    });

    format!("ws://{addr}/ws")
}

async fn connect(url: &str) -> (Connection, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel(32);
    let conn = transport::connect(url, tx).await.unwrap();
    (conn, rx)
}

async fn next_event(rx: &mut mpsc::Receiver<AppEvent>) -> Option<AppEvent> {
    timeout(WAIT, rx.recv()).await.unwrap()
}

fn bob_says(text: &str) -> ChatMessage {
    ChatMessage {
        role: "ADMIN".into(),
        role_color: "#FF0000".into(),
        sender: "Bob".into(),
        sender_color: "#00FF00".into(),
        content: text.as_bytes().to_vec(),
    }
}

/// Hold the connection open until the client goes away.
async fn drain(ws: &mut WebSocketStream<TcpStream>) {
    while let Some(Ok(_)) = ws.next().await {}
}

#[tokio::test]
async fn inbound_frames_become_events() {
    let url = start_server(|mut ws| async move {
        ws.send(Message::text(bob_says("hi").encode().unwrap())).await.unwrap();
        ws.send(Message::text(bob_says("again").encode().unwrap())).await.unwrap();
        drain(&mut ws).await;
    })
    .await;

    let (_conn, mut rx) = connect(&url).await;

    assert_eq!(next_event(&mut rx).await, Some(AppEvent::MessageReceived(bob_says("hi"))));
    assert_eq!(next_event(&mut rx).await, Some(AppEvent::MessageReceived(bob_says("again"))));
}

#[tokio::test]
async fn binary_frames_are_decoded() {
    let url = start_server(|mut ws| async move {
        let frame = bob_says("bin").encode().unwrap().into_bytes();
        ws.send(Message::binary(frame)).await.unwrap();
        drain(&mut ws).await;
    })
    .await;

    let (_conn, mut rx) = connect(&url).await;

    assert_eq!(next_event(&mut rx).await, Some(AppEvent::MessageReceived(bob_says("bin"))));
}

#[tokio::test]
async fn sent_frames_reach_the_server() {
    let (seen_tx, mut seen_rx) = mpsc::channel(1);
    let url = start_server(|mut ws| async move {
        if let Some(Ok(Message::Text(text))) = ws.next().await {
            seen_tx.send(text.as_str().to_owned()).await.unwrap();
        }
        drain(&mut ws).await;
    })
    .await;

    let (mut conn, _rx) = connect(&url).await;
    conn.send(bob_says("out").encode().unwrap()).await.unwrap();

    let frame = timeout(WAIT, seen_rx.recv()).await.unwrap().unwrap();
    assert_eq!(ChatMessage::decode(frame.as_bytes()).unwrap(), bob_says("out"));
}

#[tokio::test]
async fn decode_failure_ends_receive_loop() {
    let url = start_server(|mut ws| async move {
        ws.send(Message::text(bob_says("ok").encode().unwrap())).await.unwrap();
        ws.send(Message::text("not json".to_string())).await.unwrap();
        ws.send(Message::text(bob_says("lost").encode().unwrap())).await.unwrap();
        drain(&mut ws).await;
    })
    .await;

    let (_conn, mut rx) = connect(&url).await;

    assert_eq!(next_event(&mut rx).await, Some(AppEvent::MessageReceived(bob_says("ok"))));
    assert!(matches!(next_event(&mut rx).await, Some(AppEvent::ConnectionLost { .. })));
    // The loop dropped its sender: nothing after the bad frame is delivered.
    assert_eq!(next_event(&mut rx).await, None);
}

#[tokio::test]
async fn server_close_reports_connection_lost() {
    let url = start_server(|mut ws| async move {
        ws.close(None).await.unwrap();
    })
    .await;

    let (conn, mut rx) = connect(&url).await;

    let event = next_event(&mut rx).await;
    assert!(matches!(event, Some(AppEvent::ConnectionLost { .. })), "got {event:?}");

    // The loop exits once the final event is delivered
    assert_eq!(next_event(&mut rx).await, None);
    assert!(!conn.is_receiving());
}

#[tokio::test]
async fn stop_aborts_receive_loop() {
    let url = start_server(|mut ws| async move {
        drain(&mut ws).await;
    })
    .await;

    let (conn, mut rx) = connect(&url).await;
    assert!(conn.is_receiving());

    conn.stop();

    assert_eq!(next_event(&mut rx).await, None);
    assert!(!conn.is_receiving());
}

#[tokio::test]
async fn connect_fails_for_closed_port() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (tx, _rx) = mpsc::channel(1);
    let config = TransportConfig { connect_timeout: Duration::from_secs(2) };
    let result = transport::connect_with_config(&format!("ws://{addr}/ws"), tx, config).await;

    assert!(matches!(
        result,
        Err(TransportError::Connection { .. } | TransportError::Timeout { .. })
    ));
}
