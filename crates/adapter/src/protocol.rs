//! Protocol module - JSON message types for the score service
//!
//! Line-delimited JSON: each request and response is a single JSON object
//! terminated by `\n`. Requests carry a `seq` the response echoes back, so
//! clients can pipeline.

use serde::{Deserialize, Serialize};

/// Client -> server messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Submit a finished game's move count.
    Submit {
        seq: u64,
        player_name: String,
        moves: u32,
        /// Unknown values fall back to "easy".
        #[serde(default)]
        difficulty: Option<String>,
    },
    /// Fetch the top scores, optionally for one difficulty.
    Scores {
        seq: u64,
        #[serde(default)]
        difficulty: Option<String>,
    },
}

impl Request {
    pub fn seq(&self) -> u64 {
        match self {
            Request::Submit { seq, .. } | Request::Scores { seq, .. } => *seq,
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub player_name: String,
    pub moves: u32,
    pub difficulty: String,
}

/// Server -> client message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    Result {
        seq: u64,
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        rank: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<Vec<ScoreRow>>,
    },
    Error {
        seq: u64,
        message: String,
    },
}

impl Response {
    /// Error response for a line that did not parse. `seq` is 0 when the
    /// request's seq could not be recovered either.
    pub fn bad_request(seq: u64, message: impl Into<String>) -> Self {
        Response::Error {
            seq,
            message: message.into(),
        }
    }
}

/// Best-effort `seq` recovery from a malformed request line, so the error
/// response can still be correlated.
pub fn extract_seq_best_effort(s: &str) -> Option<u64> {
    let start = s.find("\"seq\"")?;
    let after_key = &s[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}
