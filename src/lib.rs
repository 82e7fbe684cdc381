//! TUI sliding puzzle (workspace facade crate).
//!
//! This package keeps the `tui_slidepuzzle::{core,adapter,term,input,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use slidepuzzle_adapter as adapter;
pub use slidepuzzle_core as core;
pub use slidepuzzle_input as input;
pub use slidepuzzle_term as term;
pub use slidepuzzle_types as types;
