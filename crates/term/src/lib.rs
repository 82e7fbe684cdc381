//! Terminal crate: framebuffer, renderer, and the puzzle view.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, ScoreStatusView, Viewport};
