//! Request routing and handlers for the quiz HTTP API
//!
//! Handlers are plain async functions over the shared record store and
//! return an [`ApiResponse`]; the network layer only moves bytes. Every
//! failure becomes a JSON error body with a matching status code.

use log::warn;
use serde_json::{json, Value};
use shared::{Disclosure, Player, QuizError};
use std::borrow::Cow;
use std::sync::Arc;
use tiny_http::Method;
use tokio::sync::RwLock;

use crate::error::status_for;
use crate::store::RecordStore;

/// Status code and JSON body produced by a handler
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn message(status: u16, kind: &str, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "message": message.into(), "error": kind }))
    }

    fn from_error(error: &QuizError) -> Self {
        Self::message(status_for(error), error.kind(), error.to_string())
    }

    fn invalid_json(error: serde_json::Error) -> Self {
        Self::message(
            400,
            "InvalidInput",
            format!(
                "Invalid JSON data. Check the provided player details. ({})",
                error
            ),
        )
    }

    /// Serializes a value, falling back to a 500 if that is impossible.
    fn json<T: serde::Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self::new(status, body),
            Err(e) => Self::message(500, "Internal", format!("failed to encode response: {}", e)),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Resources exposed by the API
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route<'a> {
    Players,
    Player(Cow<'a, str>),
    Questions,
    PlayerRank(Cow<'a, str>),
}

impl<'a> Route<'a> {
    fn parse(url: &'a str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        let mut segments = path.split('/').skip(1);
        let route = match (segments.next(), segments.next()) {
            (Some("players"), None) => Route::Players,
            (Some("players"), Some(id)) if !id.is_empty() => Route::Player(Self::decode(id)?),
            (Some("questions"), None) => Route::Questions,
            (Some("players-rank"), Some(id)) if !id.is_empty() => {
                Route::PlayerRank(Self::decode(id)?)
            }
            _ => return None,
        };

        match segments.next() {
            Some(_) => None,
            None => Some(route),
        }
    }

    /// Percent-decodes a path segment; ids that are not UTF-8 match nothing
    fn decode(segment: &'a str) -> Option<Cow<'a, str>> {
        urlencoding::decode(segment).ok()
    }
}

/// Quiz API over a shared record store
#[derive(Debug, Clone)]
pub struct Api {
    store: Arc<RwLock<RecordStore>>,
    disclosure: Disclosure,
}

impl Api {
    pub fn new(store: Arc<RwLock<RecordStore>>, disclosure: Disclosure) -> Self {
        Self { store, disclosure }
    }

    pub fn store(&self) -> &Arc<RwLock<RecordStore>> {
        &self.store
    }

    /// Routes one request to its handler
    pub async fn handle(&self, method: &Method, url: &str, body: &[u8]) -> ApiResponse {
        let Some(route) = Route::parse(url) else {
            return ApiResponse::message(404, "NotFound", format!("no resource at {}", url));
        };

        let response = match (method, route) {
            (Method::Get, Route::Players) => self.list_players().await,
            (Method::Post, Route::Players) => self.create_player(body).await,
            (Method::Patch, Route::Players) => self.update_player(None, body).await,
            (Method::Get, Route::Player(id)) => self.get_player(&id).await,
            (Method::Patch, Route::Player(id)) => self.update_player(Some(&id), body).await,
            (Method::Get, Route::Questions) => self.list_questions().await,
            (Method::Get, Route::PlayerRank(id)) => self.player_rank(&id).await,
            _ => ApiResponse::message(
                405,
                "MethodNotAllowed",
                format!("{} is not supported on {}", method, url),
            ),
        };

        if !response.is_success() {
            warn!("{} {} rejected with {}: {}", method, url, response.status, response.body["message"]);
        }
        response
    }

    async fn list_players(&self) -> ApiResponse {
        let store = self.store.read().await;
        ApiResponse::json(200, &store.players())
    }

    async fn get_player(&self, id: &str) -> ApiResponse {
        let store = self.store.read().await;
        match store.find(id) {
            Ok(player) => ApiResponse::json(200, player),
            Err(e) => ApiResponse::from_error(&e),
        }
    }

    async fn create_player(&self, body: &[u8]) -> ApiResponse {
        let player: Player = match serde_json::from_slice(body) {
            Ok(player) => player,
            Err(e) => return ApiResponse::invalid_json(e),
        };

        let mut store = self.store.write().await;
        match store.create(player) {
            Ok(created) => ApiResponse::json(201, created),
            Err(e) => ApiResponse::from_error(&e),
        }
    }

    async fn update_player(&self, path_id: Option<&str>, body: &[u8]) -> ApiResponse {
        let player: Player = match serde_json::from_slice(body) {
            Ok(player) => player,
            Err(e) => return ApiResponse::invalid_json(e),
        };

        let id = match path_id {
            Some(id) if id != player.id => {
                return ApiResponse::from_error(&QuizError::InvalidInput(format!(
                    "path id {} does not match body id {}",
                    id, player.id
                )));
            }
            Some(id) => id.to_string(),
            None => player.id.clone(),
        };

        let mut store = self.store.write().await;
        match store.replace(&id, player) {
            Ok(updated) => ApiResponse::json(200, updated),
            Err(e) => ApiResponse::from_error(&e),
        }
    }

    async fn list_questions(&self) -> ApiResponse {
        let store = self.store.read().await;
        ApiResponse::json(200, &self.disclosure.apply(store.questions()))
    }

    async fn player_rank(&self, id: &str) -> ApiResponse {
        let store = self.store.read().await;
        match store.rank(id) {
            Ok(rank) => ApiResponse::json(200, &rank),
            Err(e) => ApiResponse::from_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_api() -> Api {
        let store = RecordStore::seeded().unwrap();
        Api::new(Arc::new(RwLock::new(store)), Disclosure::Full)
    }

    fn empty_api() -> Api {
        let store = RecordStore::new(vec![], crate::seed::questions()).unwrap();
        Api::new(Arc::new(RwLock::new(store)), Disclosure::Full)
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/players"), Some(Route::Players));
        assert_eq!(Route::parse("/players/"), Some(Route::Players));
        assert_eq!(Route::parse("/players/000001M"), Some(Route::Player("000001M".into())));
        assert_eq!(Route::parse("/questions/"), Some(Route::Questions));
        assert_eq!(Route::parse("/players-rank/abc"), Some(Route::PlayerRank("abc".into())));
        assert_eq!(Route::parse("/players?verbose=1"), Some(Route::Players));
        assert_eq!(Route::parse("/players-rank"), None);
        assert_eq!(Route::parse("/players/a/b"), None);
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/scores"), None);
    }

    #[test]
    fn test_route_decodes_player_ids() {
        assert_eq!(Route::parse("/players/Jo%20Ann"), Some(Route::Player("Jo Ann".into())));
        assert_eq!(
            Route::parse("/players-rank/000001M%3Fx"),
            Some(Route::PlayerRank("000001M?x".into()))
        );
        assert_eq!(Route::parse("/players/a%2Fb"), Some(Route::Player("a/b".into())));
        assert_eq!(Route::parse("/players/%FF"), None);
    }

    #[tokio::test]
    async fn test_list_players() {
        let response = seeded_api().handle(&Method::Get, "/players", b"").await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_array().unwrap().len(), 4);
        assert_eq!(response.body[2]["name"], "Emma");
    }

    #[tokio::test]
    async fn test_list_players_when_empty() {
        let response = empty_api().handle(&Method::Get, "/players", b"").await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!([]));
    }

    #[tokio::test]
    async fn test_get_player() {
        let api = seeded_api();

        let found = api.handle(&Method::Get, "/players/000003M", b"").await;
        assert_eq!(found.status, 200);
        assert_eq!(found.body["score"], 90);

        let missing = api.handle(&Method::Get, "/players/nobody", b"").await;
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_create_player() {
        let api = seeded_api();
        let body = br#"{"id":"000005M","name":"Maria","age":41,"score":0}"#;

        let created = api.handle(&Method::Post, "/players", body).await;
        assert_eq!(created.status, 201);
        assert_eq!(created.body["id"], "000005M");

        let duplicate = api.handle(&Method::Post, "/players/", body).await;
        assert_eq!(duplicate.status, 409);
        assert_eq!(duplicate.body["error"], "DuplicateIdentifier");

        assert_eq!(api.store().read().await.len(), 5);
    }

    #[tokio::test]
    async fn test_encoded_player_id_lookup() {
        let api = seeded_api();
        let body = br#"{"id":"Jo Ann","name":"Jo","age":30,"score":40}"#;
        assert_eq!(api.handle(&Method::Post, "/players", body).await.status, 201);

        let found = api.handle(&Method::Get, "/players/Jo%20Ann", b"").await;
        assert_eq!(found.status, 200);
        assert_eq!(found.body["name"], "Jo");

        let rank = api.handle(&Method::Get, "/players-rank/Jo%20Ann", b"").await;
        assert_eq!(rank.status, 200);

        let encoded_query = api.handle(&Method::Get, "/players/000001M%3Fx", b"").await;
        assert_eq!(encoded_query.status, 404);
    }

    #[tokio::test]
    async fn test_create_player_rejects_bad_input() {
        let api = seeded_api();

        let malformed = api.handle(&Method::Post, "/players", b"{not json").await;
        assert_eq!(malformed.status, 400);

        let textual_age = br#"{"id":"x","name":"X","age":"ten"}"#;
        assert_eq!(api.handle(&Method::Post, "/players", textual_age).await.status, 400);

        let empty_id = br#"{"id":"","name":"X","age":10}"#;
        let response = api.handle(&Method::Post, "/players", empty_id).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "InvalidInput");

        assert_eq!(api.store().read().await.len(), 4);
    }

    #[tokio::test]
    async fn test_update_player() {
        let api = seeded_api();
        let body = br#"{"id":"000002M","name":"Giancarl","age":27,"score":100}"#;

        let updated = api.handle(&Method::Patch, "/players", body).await;
        assert_eq!(updated.status, 200);
        assert_eq!(updated.body["score"], 100);

        let fetched = api.handle(&Method::Get, "/players/000002M", b"").await;
        assert_eq!(fetched.body["score"], 100);

        let by_path = api.handle(&Method::Patch, "/players/000002M", body).await;
        assert_eq!(by_path.status, 200);
    }

    #[tokio::test]
    async fn test_update_player_failures() {
        let api = seeded_api();

        let ghost = br#"{"id":"ghost","name":"Ghost","age":27,"score":10}"#;
        assert_eq!(api.handle(&Method::Patch, "/players", ghost).await.status, 404);

        let mismatched = br#"{"id":"000001M","name":"Clayton","age":28,"score":40}"#;
        let response = api.handle(&Method::Patch, "/players/000002M", mismatched).await;
        assert_eq!(response.status, 400);

        let out_of_range = br#"{"id":"000001M","name":"Clayton","age":28,"score":101}"#;
        assert_eq!(api.handle(&Method::Patch, "/players", out_of_range).await.status, 400);

        let store = api.store().read().await;
        assert_eq!(store.find("000001M").unwrap().score, 30);
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn test_questions_include_flags() {
        let response = seeded_api().handle(&Method::Get, "/questions", b"").await;
        assert_eq!(response.status, 200);
        let questions = response.body.as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[1]["Answers"][2]["AnswerText"], "Euro");
        assert_eq!(questions[1]["Answers"][2]["Valid"], true);
    }

    #[tokio::test]
    async fn test_questions_without_flags() {
        let store = RecordStore::seeded().unwrap();
        let api = Api::new(Arc::new(RwLock::new(store)), Disclosure::PromptsOnly);
        let response = api.handle(&Method::Get, "/questions", b"").await;
        assert!(response.body[0]["Answers"][0].get("Valid").is_none());
    }

    #[tokio::test]
    async fn test_player_rank() {
        let api = seeded_api();

        let best = api.handle(&Method::Get, "/players-rank/000003M", b"").await;
        assert_eq!(best.status, 200);
        assert_eq!(best.body, json!(1));

        let worst = api.handle(&Method::Get, "/players-rank/000002M", b"").await;
        assert_eq!(worst.body, json!(4));

        let missing = api.handle(&Method::Get, "/players-rank/ghost", b"").await;
        assert_eq!(missing.status, 404);
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let api = seeded_api();
        assert_eq!(api.handle(&Method::Get, "/leaderboard", b"").await.status, 404);
        assert_eq!(api.handle(&Method::Delete, "/players/000001M", b"").await.status, 405);
        assert_eq!(api.handle(&Method::Post, "/questions", b"{}").await.status, 405);
    }
}
