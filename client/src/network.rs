//! HTTP access to the quiz server

use crate::error::ClientError;
use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use shared::{Player, Question};
use std::time::Duration;

/// Operations the quiz session needs from the server
///
/// The session only talks to this trait, so it can be driven against the
/// real HTTP API or an in-memory stand-in.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Looks a player up, returning `None` when the id is unknown
    async fn find_player(&self, id: &str) -> Result<Option<Player>, ClientError>;
    async fn create_player(&self, player: &Player) -> Result<Player, ClientError>;
    /// Replaces the stored record with `player`
    async fn update_player(&self, player: &Player) -> Result<Player, ClientError>;
    async fn players(&self) -> Result<Vec<Player>, ClientError>;
    async fn questions(&self) -> Result<Vec<Question>, ClientError>;
    async fn rank(&self, id: &str) -> Result<usize, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Quiz API client over HTTP
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::UpstreamUnavailable {
                url: base_url.to_string(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a resource keyed by a player id, with the id percent-encoded
    fn player_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource, urlencoding::encode(id))
    }

    fn unavailable(&self, error: reqwest::Error) -> ClientError {
        let reason = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection refused. Is the server running?".to_string()
        } else {
            error.to_string()
        };
        ClientError::UpstreamUnavailable {
            url: self.base_url.clone(),
            reason,
        }
    }

    /// Sends a request and decodes a successful JSON body
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| self.unavailable(e))?;

        let status = response.status().as_u16();
        debug!("{} <- HTTP {}", response.url(), status);

        if status >= 400 {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);

            return Err(match status {
                404 => ClientError::NotFound(message),
                400 | 409 => ClientError::Rejected(message),
                _ => {
                    warn!("Unexpected HTTP {} from quiz API: {}", status, message);
                    ClientError::Api { status, message }
                }
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("failed to parse response: {}", e)))
    }
}

#[async_trait]
impl QuizBackend for ApiClient {
    async fn find_player(&self, id: &str) -> Result<Option<Player>, ClientError> {
        match self.send(self.client.get(self.player_url("players", id))).await {
            Ok(player) => Ok(Some(player)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_player(&self, player: &Player) -> Result<Player, ClientError> {
        self.send(self.client.post(self.url("/players")).json(player))
            .await
    }

    async fn update_player(&self, player: &Player) -> Result<Player, ClientError> {
        self.send(self.client.patch(self.url("/players")).json(player))
            .await
    }

    async fn players(&self) -> Result<Vec<Player>, ClientError> {
        self.send(self.client.get(self.url("/players"))).await
    }

    async fn questions(&self) -> Result<Vec<Question>, ClientError> {
        self.send(self.client.get(self.url("/questions"))).await
    }

    async fn rank(&self, id: &str) -> Result<usize, ClientError> {
        self.send(self.client.get(self.player_url("players-rank", id)))
            .await
    }
}
