//! Server network layer handling HTTP transport and request dispatch

use crate::api::{Api, ApiResponse};
use crate::error::ServerError;
use log::{debug, error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Request, Response};
use tokio::sync::mpsc;

/// Capacity of the queue between the listener thread and the dispatch loop
const REQUEST_QUEUE: usize = 64;

/// Messages sent from the listener thread to the dispatch loop
pub enum ServerMessage {
    RequestReceived { request: Request, body: Vec<u8> },
    Shutdown,
}

/// Handle for stopping a running server
#[derive(Clone)]
pub struct ShutdownHandle {
    server_tx: mpsc::Sender<ServerMessage>,
}

impl ShutdownHandle {
    /// Asks the dispatch loop to stop after the request it is handling
    pub async fn shutdown(&self) {
        if self.server_tx.send(ServerMessage::Shutdown).await.is_err() {
            debug!("Server already stopped");
        }
    }
}

/// HTTP front end for the quiz API
///
/// A blocking listener thread accepts requests and forwards them to a single
/// async loop, which answers them one at a time.
pub struct Server {
    http: Arc<tiny_http::Server>,
    addr: SocketAddr,
    api: Api,

    server_tx: mpsc::Sender<ServerMessage>,
    server_rx: mpsc::Receiver<ServerMessage>,
}

impl Server {
    pub fn bind(addr: &str, api: Api) -> Result<Self, ServerError> {
        let http = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;

        let addr = http.server_addr().to_ip().ok_or_else(|| ServerError::Bind {
            addr: addr.to_string(),
            reason: "unable to determine bound address".into(),
        })?;
        info!("Server listening on http://{}", addr);

        let (server_tx, server_rx) = mpsc::channel(REQUEST_QUEUE);

        Ok(Server {
            http: Arc::new(http),
            addr,
            api,
            server_tx,
            server_rx,
        })
    }

    /// Address the listener is bound to, with the real port when 0 was requested
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server_tx: self.server_tx.clone(),
        }
    }

    /// Spawns the thread that accepts requests and reads their bodies
    fn spawn_listener(&self) {
        let http = Arc::clone(&self.http);
        let server_tx = self.server_tx.clone();

        thread::spawn(move || {
            while let Ok(mut request) = http.recv() {
                let mut body = Vec::new();
                if let Err(e) = request.as_reader().read_to_end(&mut body) {
                    warn!("Failed to read body of {} {}: {}", request.method(), request.url(), e);
                    let response = ApiResponse {
                        status: 400,
                        body: serde_json::json!({
                            "message": "Unable to read request body",
                            "error": "InvalidInput",
                        }),
                    };
                    if let Err(e) = request.respond(Self::encode(&response)) {
                        error!("Failed to send response: {}", e);
                    }
                    continue;
                }

                if let Err(e) = server_tx.blocking_send(ServerMessage::RequestReceived { request, body }) {
                    error!("Failed to forward request to dispatch loop: {}", e);
                    break;
                }
            }
            debug!("Listener thread stopped");
        });
    }

    fn encode(response: &ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
        let text = serde_json::to_string_pretty(&response.body).unwrap_or_else(|_| "null".into());
        let mut http_response = Response::from_string(text).with_status_code(response.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
            http_response = http_response.with_header(header);
        }
        http_response
    }

    /// Runs one request through the API and writes the response back
    async fn dispatch(&self, request: Request, body: Vec<u8>) {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = self.api.handle(&method, &url, &body).await;
        info!("{} {} -> {}", method, url, response.status);

        let http_response = Self::encode(&response);
        match tokio::task::spawn_blocking(move || request.respond(http_response)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Failed to send response for {} {}: {}", method, url, e),
            Err(e) => error!("Response task for {} {} panicked: {}", method, url, e),
        }
    }

    /// Main server loop answering requests until shut down
    pub async fn run(mut self) -> Result<(), ServerError> {
        self.spawn_listener();
        info!("Server started successfully");

        while let Some(message) = self.server_rx.recv().await {
            match message {
                ServerMessage::RequestReceived { request, body } => {
                    self.dispatch(request, body).await;
                }
                ServerMessage::Shutdown => {
                    info!("Server shutting down");
                    break;
                }
            }
        }

        self.http.unblock();
        Ok(())
    }
}
