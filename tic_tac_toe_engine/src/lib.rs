//! Tic-tac-toe rules, turn and score bookkeeping, and a win-or-block
//! computer opponent. Single-threaded and synchronous; a presentation layer
//! drives it one call at a time.

pub mod game;

pub use game::computer::{CellChooser, RandomChooser, COMPUTER_SYMBOL};
pub use game::engine::GameEngine;
pub use game::models::{Board, Cell, LineType, Position, RoundResult, Symbol, WinningLine};
pub use game::players::{PlayerConfig, ScoreBoard, Seat};
