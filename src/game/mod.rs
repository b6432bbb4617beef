//! Tic-tac-toe rules: board model, win detection and the per-session
//! round/score state machine. Nothing in here touches the terminal or audio.

pub mod board;
pub mod error;
pub mod session;
pub mod win;

pub use board::{Cell, PlayerRole, CELL_COUNT};
pub use error::GameError;
pub use session::{GameSession, MoveOutcome, RoundState};
