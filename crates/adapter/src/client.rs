//! Blocking client for the score service
//!
//! Used by the game binary after a win. Synchronous on purpose: the game
//! loop is single-threaded and the submission is fire-and-forget, so a
//! short blocking round-trip with a timeout is all that is needed.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::protocol::{Request, Response, ScoreRow};

const IO_TIMEOUT: Duration = Duration::from_secs(3);

/// One connection to the score server.
pub struct ScoreClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    next_seq: u64,
}

impl ScoreClient {
    /// Connect to `addr` (e.g. "127.0.0.1:7878").
    pub fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .with_context(|| format!("connecting to score server at {}", addr))?;
        stream.set_read_timeout(Some(IO_TIMEOUT))?;
        stream.set_write_timeout(Some(IO_TIMEOUT))?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            reader,
            writer: stream,
            next_seq: 1,
        })
    }

    fn round_trip(&mut self, request: &Request) -> Result<Response> {
        let mut line = serde_json::to_vec(request)?;
        line.push(b'\n');
        self.writer.write_all(&line)?;

        let mut reply = String::new();
        let n = self.reader.read_line(&mut reply)?;
        if n == 0 {
            bail!("score server closed the connection");
        }
        Ok(serde_json::from_str(reply.trim())?)
    }

    fn seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Submit a score. Returns `(rank, message)` on acceptance.
    pub fn submit(
        &mut self,
        player_name: &str,
        moves: u32,
        difficulty: &str,
    ) -> Result<(Option<u32>, Option<String>)> {
        let request = Request::Submit {
            seq: self.seq(),
            player_name: player_name.to_string(),
            moves,
            difficulty: Some(difficulty.to_string()),
        };
        match self.round_trip(&request)? {
            Response::Result {
                success: true,
                rank,
                message,
                ..
            } => Ok((rank, message)),
            Response::Result {
                message: Some(message),
                ..
            } => bail!("submission rejected: {}", message),
            Response::Result { .. } => bail!("submission rejected"),
            Response::Error { message, .. } => bail!("score server error: {}", message),
        }
    }

    /// Fetch the top scores for a difficulty.
    pub fn top_scores(&mut self, difficulty: Option<&str>) -> Result<Vec<ScoreRow>> {
        let request = Request::Scores {
            seq: self.seq(),
            difficulty: difficulty.map(str::to_string),
        };
        match self.round_trip(&request)? {
            Response::Result {
                scores: Some(scores),
                ..
            } => Ok(scores),
            Response::Result { .. } => Ok(Vec::new()),
            Response::Error { message, .. } => bail!("score server error: {}", message),
        }
    }
}
