//! Key mapping from terminal events to game actions.
//!
//! Arrow keys and WASD slide the tile on that side of the blank into the
//! blank cell; digits pick a difficulty in the menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slidepuzzle_types::{Difficulty, GameAction, SlideDir};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Sliding
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Slide(SlideDir::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Slide(SlideDir::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Slide(SlideDir::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Slide(SlideDir::Right))
        }

        // Difficulty selection (menu)
        KeyCode::Char('1') => Some(GameAction::Select(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::Select(Difficulty::Hard)),

        // Hint
        KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::Hint),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
