use tic_tac_toe_engine::game::players::DEFAULT_PLAYER2_NAME;
use tic_tac_toe_engine::{CellChooser, GameEngine, Seat, Symbol};

use crate::config::AppConfig;

/// Name player 2 falls back to when the computer box is unchecked.
pub const HUMAN_PLAYER2_NAME: &str = "Player2";

/// Contents of the player setup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSetup {
    pub player1_name: String,
    pub player2_name: String,
    pub vs_computer: bool,
    pub player1_starts: bool,
}

impl PlayerSetup {
    pub fn from_config(config: &AppConfig) -> Self {
        let player2_name = if config.vs_computer {
            DEFAULT_PLAYER2_NAME.to_string()
        } else {
            config
                .player2_name
                .clone()
                .unwrap_or_else(|| HUMAN_PLAYER2_NAME.to_string())
        };

        PlayerSetup {
            player1_name: config.player1_name.clone(),
            player2_name,
            vs_computer: config.vs_computer,
            player1_starts: true,
        }
    }

    /// Pre-fills the form with the game currently being played.
    pub fn from_engine<C: CellChooser>(engine: &GameEngine<C>) -> Self {
        let players = engine.players();
        PlayerSetup {
            player1_name: players.player1_name().to_string(),
            player2_name: players.player2_name().to_string(),
            vs_computer: players.vs_computer(),
            player1_starts: players.seat_of(Symbol::X) == Seat::One,
        }
    }

    /// Call after the computer checkbox changed: the computer always sits in
    /// seat two under a fixed name.
    pub fn on_computer_toggled(&mut self) {
        self.player2_name = if self.vs_computer {
            DEFAULT_PLAYER2_NAME.to_string()
        } else {
            HUMAN_PLAYER2_NAME.to_string()
        };
    }

    pub fn x_seat(&self) -> Seat {
        if self.player1_starts {
            Seat::One
        } else {
            Seat::Two
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tic_tac_toe_engine::RandomChooser;

    #[test]
    fn toggling_computer_renames_player2() {
        let mut setup = PlayerSetup::from_config(&AppConfig::default());
        assert_eq!(setup.player2_name, "Computer");

        setup.vs_computer = false;
        setup.on_computer_toggled();
        assert_eq!(setup.player2_name, "Player2");

        setup.vs_computer = true;
        setup.on_computer_toggled();
        assert_eq!(setup.player2_name, "Computer");
    }

    #[test]
    fn unchecked_box_without_name_uses_human_default() {
        let config = AppConfig {
            vs_computer: false,
            ..AppConfig::default()
        };
        assert_eq!(PlayerSetup::from_config(&config).player2_name, "Player2");

        let named = AppConfig {
            player2_name: Some("Bob".to_string()),
            ..config
        };
        assert_eq!(PlayerSetup::from_config(&named).player2_name, "Bob");
    }

    #[test]
    fn x_seat_follows_radio_choice() {
        let mut setup = PlayerSetup {
            player1_name: "Sam".to_string(),
            player2_name: "Sam".to_string(),
            vs_computer: false,
            player1_starts: true,
        };
        assert_eq!(setup.x_seat(), Seat::One);
        setup.player1_starts = false;
        assert_eq!(setup.x_seat(), Seat::Two);
    }

    #[test]
    fn reflects_current_game() {
        let mut engine = GameEngine::with_chooser(RandomChooser::seeded(1));
        engine.configure_game("Ann", "Bob", "Bob", false);
        let setup = PlayerSetup::from_engine(&engine);
        assert_eq!(setup.player1_name, "Ann");
        assert!(!setup.vs_computer);
        assert!(!setup.player1_starts);
    }
}
