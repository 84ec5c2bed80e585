//! Shared utilities for integration tests.

use std::net::SocketAddr;

use asset_angel_backend::config::AppConfig;
use asset_angel_backend::HttpServer;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Response parts collected from an in-process request.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Send a request through the fully layered router without a socket.
pub async fn send(config: AppConfig, request: Request<Body>) -> TestResponse {
    let router = HttpServer::new(config).router();
    let response = router.oneshot(request).await.unwrap();

    let (parts, body) = response.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap();

    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

/// Build a bodiless request.
#[allow(dead_code)]
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A running server on an ephemeral port.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl RunningServer {
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap().unwrap();
    }
}

/// Start a server on `127.0.0.1:0`.
#[allow(dead_code)]
pub async fn start_server(mut config: AppConfig) -> RunningServer {
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;

    let listener = asset_angel_backend::net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, async move {
        let _ = rx.await;
    }));

    RunningServer {
        addr,
        shutdown: tx,
        handle,
    }
}
