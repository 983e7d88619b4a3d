//! Fake provider server for gateway tests.
//!
//! Serves canned envelope responses over real TCP so client tests exercise
//! the full request path: bind an ephemeral port, route by method and path,
//! count hits.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn get(path: &str, status: u16, body: String) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            status,
            body,
        }
    }

    pub fn post(path: &str, status: u16, body: String) -> Self {
        Self {
            method: "POST",
            path: path.to_string(),
            status,
            body,
        }
    }
}

/// Spawn a fake provider serving the given routes until the runtime drops.
///
/// Returns the base URL and a counter of requests served.
pub async fn spawn_provider(routes: Vec<Route>) -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let hits_server = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            hits_server.fetch_add(1, Ordering::SeqCst);
            let routes = routes.clone();

            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();

                let request_line = request.lines().next().unwrap_or_default();
                let mut parts = request_line.split_whitespace();
                let method = parts.next().unwrap_or_default();
                let target = parts.next().unwrap_or_default();
                let path = target.split('?').next().unwrap_or_default();

                let (status, body) = routes
                    .iter()
                    .find(|r| r.method == method && r.path == path)
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or_else(|| (404, envelope_err("route not scripted")));

                let reason = if (200..300).contains(&status) {
                    "OK"
                } else {
                    "Error"
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    (format!("http://{addr}"), hits)
}

/// A base URL nothing is listening on.
pub async fn dead_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn envelope_ok(data: serde_json::Value) -> String {
    serde_json::json!({
        "success": true,
        "data": data,
        "timestamp": "2025-06-20T10:00:00"
    })
    .to_string()
}

pub fn envelope_err(error: &str) -> String {
    serde_json::json!({
        "success": false,
        "error": error,
        "timestamp": "2025-06-20T10:00:00"
    })
    .to_string()
}
