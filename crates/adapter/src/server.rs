//! TCP server for the score service
//!
//! Accepts connections and answers line-delimited JSON requests against a
//! shared [`ScoreBoard`]. Uses tokio for async networking; one task per
//! client, submissions serialized through an `RwLock`.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, RwLock};

use crate::protocol::{extract_seq_best_effort, Request, Response};
use crate::store::{ScoreBoard, SubmitOutcome};
use slidepuzzle_types::Difficulty;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host =
            env::var("SLIDEPUZZLE_SCORE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SLIDEPUZZLE_SCORE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);

        Self { host, port }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Start the TCP server.
///
/// `ready_tx` receives the bound address once the listener is up, which
/// lets tests bind port 0 and discover the real port.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    println!("[Score] TCP server listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let store = Arc::new(RwLock::new(ScoreBoard::new()));
    let mut client_id_counter = 0usize;

    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        println!("[Score] Client {} connected from {}", client_id, addr);

        let store = Arc::clone(&store);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, store).await {
                eprintln!("[Score] Client {} error: {}", client_id, e);
            }
            println!("[Score] Client {} disconnected", client_id);
        });
    }
}

/// Blocking entrypoint for non-async binaries: builds a runtime and runs
/// the server on it.
pub fn run_blocking(config: ServerConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config, None))
}

async fn handle_client(socket: TcpStream, store: Arc<RwLock<ScoreBoard>>) -> anyhow::Result<()> {
    let (read_half, mut write_half) = socket.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => apply_request(&store, request).await,
            Err(e) => {
                let seq = extract_seq_best_effort(&line).unwrap_or(0);
                Response::bad_request(seq, format!("invalid request: {}", e))
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        write_half.write_all(&out).await?;
    }

    Ok(())
}

async fn apply_request(store: &Arc<RwLock<ScoreBoard>>, request: Request) -> Response {
    match request {
        Request::Submit {
            seq,
            player_name,
            moves,
            difficulty,
        } => {
            let outcome = store
                .write()
                .await
                .submit(&player_name, moves, difficulty.as_deref());
            match outcome {
                SubmitOutcome::Accepted { rank, scores } => Response::Result {
                    seq,
                    success: true,
                    rank: Some(rank),
                    message: Some(format!("Score saved! You are #{}", rank)),
                    scores: Some(scores),
                },
                SubmitOutcome::Rejected { message } => Response::Result {
                    seq,
                    success: false,
                    rank: None,
                    message: Some(message),
                    scores: None,
                },
            }
        }
        Request::Scores { seq, difficulty } => {
            let filter = difficulty.as_deref().and_then(Difficulty::from_str);
            let scores = store.read().await.top(filter);
            Response::Result {
                seq,
                success: true,
                rank: None,
                message: None,
                scores: Some(scores),
            }
        }
    }
}
