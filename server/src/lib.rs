//! # Quiz Server Library
//!
//! This library provides the HTTP server of the quiz platform. It owns the
//! canonical player roster and question bank, validates every change made by
//! clients and answers rank queries against the current roster.
//!
//! ## Core Responsibilities
//!
//! ### Record Keeping
//! The server holds the only copy of the player and question records. Clients
//! read questions, register players and report finished quizzes; the server
//! decides whether each change is accepted.
//!
//! ### Validation
//! Requests are checked before they reach the store:
//! - Malformed JSON and wrongly typed fields are rejected with `400`
//! - Player identifiers must be non-empty and unique
//! - Ages must be positive and scores must lie between 0 and 100
//!
//! ### Ranking
//! Ranks are computed on demand from the stored scores, so a score update is
//! reflected by the very next rank query.
//!
//! ## Architecture Design
//!
//! ### Sequential Dispatch
//! A listener thread accepts HTTP requests and hands them to a single async
//! loop, which handles each request to completion before looking at the next.
//! The store sits behind one read/write lock and all mutations take the write
//! guard, so no check-then-write sequence is ever interleaved.
//!
//! ### Structured Errors
//! A bad request never stops the server. Every failure is turned into a JSON
//! body of the form `{"message": ..., "error": ...}` with a matching status.
//!
//! ## Module Organization
//!
//! ### API Module (`api`)
//! Routing and request handlers. Pure async functions over the store that
//! produce a status code and a JSON body.
//!
//! ### Store Module (`store`)
//! The in-memory roster and question bank with find/create/replace/rank.
//!
//! ### Network Module (`network`)
//! The HTTP listener, request queue and dispatch loop.
//!
//! ### Seed Module (`seed`)
//! Demo players and questions loaded at startup.
//!
//! ## Endpoints
//!
//! | Method  | Path                  | Result                         |
//! |---------|-----------------------|--------------------------------|
//! | `GET`   | `/players`            | all players                    |
//! | `GET`   | `/players/{id}`       | one player or `404`            |
//! | `POST`  | `/players`            | created player (`201`)         |
//! | `PATCH` | `/players[/{id}]`     | updated player or `404`        |
//! | `GET`   | `/questions`          | questions with their answers   |
//! | `GET`   | `/players-rank/{id}`  | integer rank or `404`          |
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::api::Api;
//! use server::network::Server;
//! use server::store::RecordStore;
//! use shared::Disclosure;
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(RwLock::new(RecordStore::seeded()?));
//!     let api = Api::new(store, Disclosure::Full);
//!
//!     let server = Server::bind("127.0.0.1:8080", api)?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod network;
pub mod seed;
pub mod store;
