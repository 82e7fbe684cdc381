//! Standalone score server binary.
//!
//! Listens for line-delimited JSON requests and keeps a per-difficulty
//! top-ten leaderboard in memory. Configure with `SLIDEPUZZLE_SCORE_HOST`
//! and `SLIDEPUZZLE_SCORE_PORT`.

use anyhow::Result;

use tui_slidepuzzle::adapter::{run_blocking, ServerConfig};

fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    run_blocking(config)
}
