//! # Quiz Client Library
//!
//! This library provides the terminal client of the quiz platform. It
//! identifies or registers the person at the keyboard, walks them through the
//! server's questions, scores their answers and reports the resulting score
//! and rank.
//!
//! ## Architecture Overview
//!
//! The client is split so that the quiz logic never depends on a real
//! terminal or a real server:
//!
//! ### Interaction Protocol
//! Every piece of user input is requested through a [`console::Prompt`] and
//! every reply is a plain line of text. The interactive binary answers
//! prompts from stdin; tests answer them from a script.
//!
//! ### Backend Abstraction
//! The session talks to the server through the [`network::QuizBackend`]
//! trait. [`network::ApiClient`] implements it over HTTP.
//!
//! ### Local Scoring
//! Answers are scored on the client with the shared scoring engine. Only the
//! final score is sent back, as a full replacement of the player record.
//!
//! ## Module Organization
//!
//! ### Session Module (`session`)
//! The quiz state machine:
//! `Unidentified → Identified | Registered → Answering → Scored → Ranked → Reported`
//!
//! ### Console Module (`console`)
//! Prompts, the stdin/stdout terminal and reply parsing.
//!
//! ### Network Module (`network`)
//! HTTP calls to the quiz API and mapping of status codes to errors.
//!
//! ### Rendering Module (`rendering`)
//! Plain-text formatting of prompts, listings and the final report.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::console::Terminal;
//! use client::network::ApiClient;
//! use client::session::QuizSession;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new("http://127.0.0.1:8080", Duration::from_secs(10))?;
//!     let mut terminal = Terminal::stdio();
//!
//!     let report = QuizSession::new(&api, &mut terminal).run().await?;
//!     println!("Final score: {}", report.score);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Handling
//!
//! Invalid replies are asked again. A server that cannot be reached ends the
//! session with [`error::ClientError::UpstreamUnavailable`]; there is no retry
//! loop.

pub mod console;
pub mod error;
pub mod network;
pub mod rendering;
pub mod session;
