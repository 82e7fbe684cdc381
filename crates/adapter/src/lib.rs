//! Leaderboard adapter - line-delimited JSON score service
//!
//! Persists the best move counts per difficulty and answers rank queries.
//! The wire format is one JSON object per line in both directions; see
//! [`protocol`] for the message types.
//!
//! The game never depends on this service being up: score submission is
//! fire-and-forget from the engine's perspective.

pub mod client;
pub mod protocol;
pub mod server;
pub mod store;

pub use client::ScoreClient;
pub use protocol::{Request, Response, ScoreRow};
pub use server::{run_blocking, run_server, ServerConfig};
pub use store::{ScoreBoard, SubmitOutcome};
