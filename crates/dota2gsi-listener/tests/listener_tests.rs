//! End-to-end tests against a listener bound to a real socket.
//!
//! Each test binds an ephemeral port on `127.0.0.1` and posts updates
//! with `reqwest`, the way the game client does: one request at a time,
//! waiting for each response before sending the next.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dota2gsi_listener::{CallbackSink, ListenerConfig, ListenerError, start, start_with_sink};
use dota2gsi_types::Snapshot;
use futures::StreamExt as _;
use serde_json::json;
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tokio::net::TcpStream;

fn ephemeral_config() -> ListenerConfig {
    ListenerConfig {
        host: String::from("127.0.0.1"),
        port: 0,
        ..ListenerConfig::default()
    }
}

fn short_grace_config() -> ListenerConfig {
    ListenerConfig {
        shutdown_grace_ms: 200,
        ..ephemeral_config()
    }
}

async fn post(client: &reqwest::Client, url: &str, body: impl Into<reqwest::Body>) {
    let response = client.post(url).body(body).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn sequential_updates_arrive_in_order() {
    let (handle, mut updates) = start(&ephemeral_config()).await.unwrap();
    let url = format!("http://{}/", handle.local_addr());
    let client = reqwest::Client::new();

    for clock_time in 0..25 {
        let body = json!({"map": {"name": "dota", "clock_time": clock_time}});
        post(&client, &url, body.to_string()).await;
    }

    for expected in 0..25 {
        let snapshot = updates.recv().await.unwrap();
        assert_eq!(snapshot.map.clock_time, expected);
    }
    assert!(updates.try_recv().is_none());

    drop(client);
    handle.shutdown().await.unwrap();
    assert!(updates.recv().await.is_none());
}

#[tokio::test]
async fn no_requests_means_no_updates() {
    let (handle, mut updates) = start(&ephemeral_config()).await.unwrap();
    assert!(updates.is_empty());

    handle.shutdown().await.unwrap();
    assert!(updates.recv().await.is_none());
}

#[tokio::test]
async fn malformed_body_does_not_disturb_following_updates() {
    let (handle, mut updates) = start(&ephemeral_config()).await.unwrap();
    let url = format!("http://{}/", handle.local_addr());
    let client = reqwest::Client::new();

    post(&client, &url, "not json").await;
    post(&client, &url, r#"{"hero":{"level":"ten"}}"#).await;
    post(&client, &url, r#"{"hero":{"level":10}}"#).await;

    let snapshot = updates.recv().await.unwrap();
    assert_eq!(snapshot.hero.level, 10);

    drop(client);
    handle.shutdown().await.unwrap();
    assert!(updates.recv().await.is_none());
}

#[tokio::test]
async fn shutdown_drains_queued_updates_then_ends_stream() {
    let (handle, updates) = start(&ephemeral_config()).await.unwrap();
    let url = format!("http://{}/", handle.local_addr());
    let client = reqwest::Client::new();

    for kills in 0..3 {
        post(&client, &url, json!({"player": {"kills": kills}}).to_string()).await;
    }

    drop(client);
    handle.shutdown().await.unwrap();

    let kills: Vec<i32> = updates.map(|s| s.player.kills).collect().await;
    assert_eq!(kills, vec![0, 1, 2]);
}

#[tokio::test]
async fn shutdown_closes_the_socket() {
    let (handle, _updates) = start(&ephemeral_config()).await.unwrap();
    let addr = handle.local_addr();
    handle.shutdown().await.unwrap();

    let connect = tokio::net::TcpStream::connect(addr).await;
    assert!(connect.is_err());
}

#[tokio::test]
async fn port_in_use_fails_to_start() {
    let (first, _updates) = start(&ephemeral_config()).await.unwrap();

    let taken = ListenerConfig {
        port: first.local_addr().port(),
        ..ephemeral_config()
    };
    let err = start(&taken).await.unwrap_err();
    assert!(matches!(err, ListenerError::Bind { .. }));
    assert!(err.to_string().contains("bind failed on 127.0.0.1:"));

    first.shutdown().await.unwrap();
}

#[tokio::test]
async fn callback_sink_sees_every_update() {
    let seen: Arc<Mutex<Vec<Snapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::clone(&seen);
    let sink = CallbackSink::new(move |snapshot| store.lock().unwrap().push(snapshot));

    let handle = start_with_sink(&ephemeral_config(), sink).await.unwrap();
    let url = format!("http://{}/", handle.local_addr());
    let client = reqwest::Client::new();

    post(&client, &url, r#"{"player":{"gpm":300}}"#).await;
    post(&client, &url, r#"{"player":{"gpm":310},"previously":{"player":{"gpm":300}}}"#).await;

    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        let latest = seen.last().unwrap();
        assert_eq!(latest.player.gold_per_minute, 310);
        assert_eq!(latest.depth(), 1);
    }

    drop(client);
    tokio::time::timeout(Duration::from_secs(5), handle.shutdown())
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn shutdown_returns_despite_stalled_body() {
    let (handle, _updates) = start(&short_grace_config()).await.unwrap();

    let mut stream = TcpStream::connect(handle.local_addr()).await.unwrap();
    stream
        .write_all(b"POST / HTTP/1.1\r\nHost: localhost\r\nContent-Length: 100\r\n\r\n{\"map\":")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    tokio::time::timeout(Duration::from_secs(5), handle.shutdown())
        .await
        .unwrap()
        .unwrap();
    drop(stream);
}

#[tokio::test]
async fn shutdown_returns_despite_stalled_headers() {
    let (handle, _updates) = start(&short_grace_config()).await.unwrap();

    let mut stream = TcpStream::connect(handle.local_addr()).await.unwrap();
    stream
        .write_all(b"POST / HTTP/1.1\r\nHost: loc")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    tokio::time::timeout(Duration::from_secs(5), handle.shutdown())
        .await
        .unwrap()
        .unwrap();
    drop(stream);
}

#[tokio::test]
async fn stalled_body_is_answered_after_read_timeout() {
    let config = ListenerConfig {
        read_timeout_ms: 100,
        ..short_grace_config()
    };
    let (handle, mut updates) = start(&config).await.unwrap();

    let mut stream = TcpStream::connect(handle.local_addr()).await.unwrap();
    stream
        .write_all(b"POST / HTTP/1.1\r\nHost: localhost\r\nContent-Length: 100\r\n\r\n{\"map\":")
        .await
        .unwrap();

    let mut buf = [0_u8; 64];
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read(&mut buf))
        .await
        .unwrap()
        .unwrap();
    let head = String::from_utf8_lossy(buf.get(..read).unwrap());
    assert!(head.starts_with("HTTP/1.1 200"), "unexpected response: {head}");

    drop(stream);
    handle.shutdown().await.unwrap();
    assert!(updates.try_recv().is_none());
}
