use serde::{Deserialize, Serialize};
use tracing::warn;

use super::models::Symbol;

pub const DEFAULT_PLAYER1_NAME: &str = "Player1";
pub const DEFAULT_PLAYER2_NAME: &str = "Computer";

/// One of the two configured players. Seat two is the computer when playing
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    player1_name: String,
    player2_name: String,
    vs_computer: bool,
    x_seat: Seat,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            vs_computer: true,
            x_seat: Seat::One,
        }
    }
}

impl PlayerConfig {
    pub fn new(
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        starting_x_name: &str,
        vs_computer: bool,
    ) -> Self {
        let player1_name = player1_name.into();
        let player2_name = player2_name.into();

        let x_seat = if starting_x_name == player1_name {
            Seat::One
        } else if starting_x_name == player2_name {
            Seat::Two
        } else {
            warn!(
                "Starting X name {:?} matches neither {:?} nor {:?}; player 1 starts.",
                starting_x_name, player1_name, player2_name
            );
            Seat::One
        };

        PlayerConfig::seated(player1_name, player2_name, x_seat, vs_computer)
    }

    /// Like [`PlayerConfig::new`], but the X role is given by seat, so equal
    /// names cannot make the choice ambiguous.
    pub fn seated(
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        x_seat: Seat,
        vs_computer: bool,
    ) -> Self {
        PlayerConfig {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            vs_computer,
            x_seat,
        }
    }

    pub fn player1_name(&self) -> &str {
        &self.player1_name
    }

    pub fn player2_name(&self) -> &str {
        &self.player2_name
    }

    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::One => &self.player1_name,
            Seat::Two => &self.player2_name,
        }
    }

    /// The seat currently holding `symbol`.
    pub fn seat_of(&self, symbol: Symbol) -> Seat {
        match symbol {
            Symbol::X => self.x_seat,
            Symbol::O => self.x_seat.other(),
        }
    }

    pub fn current_player_x_name(&self) -> &str {
        self.name(self.x_seat)
    }

    pub fn switch_starting_player(&mut self) {
        self.x_seat = self.x_seat.other();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    player1: u32,
    player2: u32,
}

impl ScoreBoard {
    pub fn get(&self, seat: Seat) -> u32 {
        match seat {
            Seat::One => self.player1,
            Seat::Two => self.player2,
        }
    }

    pub fn player1(&self) -> u32 {
        self.player1
    }

    pub fn player2(&self) -> u32 {
        self.player2
    }

    pub(crate) fn record_win(&mut self, seat: Seat) {
        match seat {
            Seat::One => self.player1 += 1,
            Seat::Two => self.player2 += 1,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = ScoreBoard::default();
    }
}
