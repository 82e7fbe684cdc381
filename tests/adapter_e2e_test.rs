//! End-to-end test for the score server over a real TCP socket.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use tui_slidepuzzle::adapter::{run_server, ServerConfig};

async fn start_server() -> std::net::SocketAddr {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (ready_tx, ready_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = run_server(config, Some(ready_tx)).await;
    });
    tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped")
}

async fn send_line(
    write_half: &mut tokio::net::tcp::OwnedWriteHalf,
    line: &str,
) {
    write_half.write_all(line.as_bytes()).await.unwrap();
    write_half.write_all(b"\n").await.unwrap();
    write_half.flush().await.unwrap();
}

async fn read_json(
    lines: &mut tokio::io::Lines<BufReader<tokio::net::tcp::OwnedReadHalf>>,
) -> serde_json::Value {
    let line = tokio::time::timeout(Duration::from_secs(2), lines.next_line())
        .await
        .unwrap()
        .unwrap()
        .expect("expected a response line");
    serde_json::from_str(&line).unwrap()
}

#[tokio::test]
async fn score_submit_and_scores_round_trip() {
    let addr = start_server().await;

    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // Submit a score.
    send_line(
        &mut write_half,
        r#"{"type":"submit","seq":1,"player_name":"Emma","moves":42,"difficulty":"easy"}"#,
    )
    .await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["type"], "result");
    assert_eq!(reply["seq"], 1);
    assert_eq!(reply["success"], true);
    assert_eq!(reply["rank"], 1);

    // A better score from another player outranks it.
    send_line(
        &mut write_half,
        r#"{"type":"submit","seq":2,"player_name":"Liam","moves":30,"difficulty":"easy"}"#,
    )
    .await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["success"], true);
    assert_eq!(reply["rank"], 1);

    // Duplicate name per difficulty is rejected.
    send_line(
        &mut write_half,
        r#"{"type":"submit","seq":3,"player_name":"Emma","moves":10,"difficulty":"easy"}"#,
    )
    .await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["seq"], 3);
    assert_eq!(reply["success"], false);

    // Scores come back ordered by moves.
    send_line(
        &mut write_half,
        r#"{"type":"scores","seq":4,"difficulty":"easy"}"#,
    )
    .await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["seq"], 4);
    let scores = reply["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0]["player_name"], "Liam");
    assert_eq!(scores[0]["moves"], 30);
    assert_eq!(scores[1]["player_name"], "Emma");
}

#[tokio::test]
async fn malformed_request_gets_error_with_seq() {
    let addr = start_server().await;

    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    send_line(&mut write_half, r#"{"type":"bogus","seq":9}"#).await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["seq"], 9);

    // The connection survives a bad line.
    send_line(
        &mut write_half,
        r#"{"type":"scores","seq":10,"difficulty":"hard"}"#,
    )
    .await;
    let reply = read_json(&mut lines).await;
    assert_eq!(reply["type"], "result");
    assert_eq!(reply["seq"], 10);
}

#[tokio::test]
async fn blocking_client_talks_to_async_server() {
    let addr = start_server().await;

    let result = tokio::task::spawn_blocking(move || {
        use tui_slidepuzzle::adapter::ScoreClient;
        let mut client = ScoreClient::connect(&addr.to_string())?;
        let (rank, _message) = client.submit("Noah", 55, "hard")?;
        let scores = client.top_scores(Some("hard"))?;
        anyhow::Result::<_>::Ok((rank, scores))
    })
    .await
    .unwrap()
    .expect("client round trip failed");

    assert_eq!(result.0, Some(1));
    assert_eq!(result.1.len(), 1);
    assert_eq!(result.1[0].player_name, "Noah");
    assert_eq!(result.1[0].moves, 55);
}
