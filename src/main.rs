//! Terminal sliding puzzle runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! When `SLIDEPUZZLE_SCORE_ADDR` and `SLIDEPUZZLE_PLAYER` are set, a win is
//! submitted to the score server and the returned rank is shown in the
//! side panel.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_slidepuzzle::adapter::ScoreClient;
use tui_slidepuzzle::core::GameSession;
use tui_slidepuzzle::input::{handle_key_event, should_quit};
use tui_slidepuzzle::term::{GameView, ScoreStatusView, TerminalRenderer, Viewport};
use tui_slidepuzzle::types::Phase;

const POLL_MS: u64 = 100;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id().wrapping_mul(2654435761).max(1);
    let mut session = GameSession::new(seed);
    let view = GameView::default();
    let mut score: Option<ScoreStatusView> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render_with_score(&session, score.as_ref(), Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                let was_playing = session.phase() == Phase::Playing;
                session.apply_action(action);
                if was_playing && session.phase() == Phase::Won {
                    score = submit_score(&session);
                } else if session.phase() != Phase::Won {
                    score = None;
                }
            }
        }
    }
}

/// Submit the finished game to the score server, if one is configured.
///
/// Runs synchronously on the win transition; the client's own I/O timeout
/// bounds the wait. Failures become a panel message rather than an error,
/// so an absent or flaky score server never interrupts play.
fn submit_score(session: &GameSession) -> Option<ScoreStatusView> {
    let (Ok(addr), Ok(player)) = (
        std::env::var("SLIDEPUZZLE_SCORE_ADDR"),
        std::env::var("SLIDEPUZZLE_PLAYER"),
    ) else {
        return None;
    };
    let difficulty = session.difficulty()?;

    let outcome = ScoreClient::connect(&addr)
        .and_then(|mut c| c.submit(&player, session.moves(), difficulty.as_str()));
    match outcome {
        Ok((rank, message)) => Some(ScoreStatusView { rank, message }),
        Err(err) => Some(ScoreStatusView {
            rank: None,
            message: Some(format!("submit failed: {err}")),
        }),
    }
}
