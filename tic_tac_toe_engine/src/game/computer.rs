use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::models::{Board, Position, Symbol};

/// The computer always plays O; X is the opponent it blocks.
pub const COMPUTER_SYMBOL: Symbol = Symbol::O;

/// Picks the computer's move when there is nothing to win or block.
pub trait CellChooser {
    /// `empties` is never empty.
    fn choose(&mut self, empties: &[Position]) -> Position;
}

/// Uniform choice over the empty cells.
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        RandomChooser { rng }
    }
}

impl<R: Rng> CellChooser for RandomChooser<R> {
    fn choose(&mut self, empties: &[Position]) -> Position {
        empties[self.rng.gen_range(0..empties.len())]
    }
}

/// First empty cell, in row-major order, that completes a line for `symbol`.
pub fn find_winning_move(board: &Board, symbol: Symbol) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|&pos| board.completes_line(pos, symbol))
}

/// Win if possible, otherwise block the opponent, otherwise defer to
/// `chooser`. Returns `None` only for a full board.
pub fn choose_move<C: CellChooser + ?Sized>(board: &Board, chooser: &mut C) -> Option<Position> {
    if let Some(pos) = find_winning_move(board, COMPUTER_SYMBOL) {
        debug!("Computer takes winning cell {:?}.", pos);
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(board, COMPUTER_SYMBOL.opposite()) {
        debug!("Computer blocks opponent at {:?}.", pos);
        return Some(pos);
    }

    let empties = board.empty_cells();
    if empties.is_empty() {
        return None;
    }
    let pos = chooser.choose(&empties);
    debug_assert!(
        empties.contains(&pos),
        "chooser picked occupied or out-of-range cell {:?}",
        pos
    );
    debug!("Computer picks {:?} from {} empty cells.", pos, empties.len());
    Some(pos)
}
