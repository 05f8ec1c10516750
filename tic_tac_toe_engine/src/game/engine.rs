use tracing::{debug, info};

use super::computer::{self, CellChooser, RandomChooser};
use super::models::{Board, Cell, Position, RoundResult, Symbol, WinningLine};
use super::players::{PlayerConfig, ScoreBoard, Seat};

/// Board, turn order, players and scores for one game.
///
/// The engine never moves on its own: after [`GameEngine::start_round`] or a
/// human move, the caller checks [`GameEngine::is_computer_turn`] and asks for
/// [`GameEngine::compute_computer_move`] itself. A move is applied in two
/// steps, [`GameEngine::apply_move`] then [`GameEngine::switch_turn`], with
/// [`GameEngine::evaluate_round`] after.
#[derive(Debug, Clone)]
pub struct GameEngine<C = RandomChooser> {
    board: Board,
    is_player_x_turn: bool,
    is_round_over: bool,
    players: PlayerConfig,
    scores: ScoreBoard,
    chooser: C,
}

impl Default for GameEngine<RandomChooser> {
    fn default() -> Self {
        GameEngine::with_chooser(RandomChooser::from_entropy())
    }
}

impl<C: CellChooser> GameEngine<C> {
    /// Default settings: "Player1" against "Computer", player 1 as X.
    pub fn with_chooser(chooser: C) -> Self {
        GameEngine {
            board: Board::new(),
            is_player_x_turn: true,
            is_round_over: false,
            players: PlayerConfig::default(),
            scores: ScoreBoard::default(),
            chooser,
        }
    }

    pub fn configure_game(
        &mut self,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        starting_x_name: &str,
        vs_computer: bool,
    ) {
        let players = PlayerConfig::new(player1_name, player2_name, starting_x_name, vs_computer);
        self.configure_players(players);
    }

    /// Same as [`GameEngine::configure_game`] with the X role given by seat.
    pub fn configure_game_seated(
        &mut self,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        x_seat: Seat,
        vs_computer: bool,
    ) {
        let players = PlayerConfig::seated(player1_name, player2_name, x_seat, vs_computer);
        self.configure_players(players);
    }

    fn configure_players(&mut self, players: PlayerConfig) {
        let vs_computer = players.vs_computer();
        self.players = players;
        self.scores.reset();
        info!(
            "New game: {:?} vs {:?} (computer: {}), {:?} starts as X.",
            self.players.player1_name(),
            self.players.player2_name(),
            vs_computer,
            self.players.current_player_x_name()
        );
        self.start_round();
    }

    pub fn start_round(&mut self) {
        self.board.clear();
        self.is_player_x_turn = true;
        self.is_round_over = false;
        debug!(
            "Round started. X: {:?}, Scores: {}:{}",
            self.players.current_player_x_name(),
            self.scores.player1(),
            self.scores.player2()
        );
    }

    /// Places the current turn's symbol. Returns `false`, leaving the board
    /// as it was, when the cell is taken or outside the grid.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let symbol = self.current_turn_symbol();
        if self.board.place(row, col, symbol) {
            debug!("{} placed at ({}, {}).", symbol, row, col);
            true
        } else {
            debug!("Move rejected: ({}, {}) is taken or out of bounds.", row, col);
            false
        }
    }

    pub fn switch_turn(&mut self) {
        self.is_player_x_turn = !self.is_player_x_turn;
        debug!("Turn switched: Now it's {}'s turn.", self.current_turn_symbol());
    }

    /// Marks the round over on a win or a draw. A win credits the player
    /// holding the winning symbol; this is the only place scores change.
    pub fn evaluate_round(&mut self) -> RoundResult {
        if let Some(line) = self.board.detect_win() {
            self.is_round_over = true;
            let seat = self.players.seat_of(line.symbol);
            self.scores.record_win(seat);
            info!(
                "Round over: {:?} wins as {}. Scores: {}:{}",
                self.players.name(seat),
                line.symbol,
                self.scores.player1(),
                self.scores.player2()
            );
            return line.into();
        }

        if self.board.is_full() {
            self.is_round_over = true;
            info!("Round over: It's a draw.");
            return RoundResult::Draw;
        }

        RoundResult::Ongoing
    }

    pub fn detect_win(&self) -> Option<WinningLine> {
        self.board.detect_win()
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn switch_starting_player(&mut self) {
        self.players.switch_starting_player();
        debug!(
            "Starting player switched: {:?} is now X.",
            self.players.current_player_x_name()
        );
    }

    /// Wins if it can, blocks X if it must, and otherwise lets the chooser
    /// pick among the empty cells.
    ///
    /// # Panics
    ///
    /// Panics when the board is full; check [`GameEngine::is_round_over`]
    /// first.
    pub fn compute_computer_move(&mut self) -> Position {
        computer::choose_move(&self.board, &mut self.chooser)
            .expect("compute_computer_move called on a full board")
    }

    pub fn winner_name(&self, symbol: Symbol) -> &str {
        self.players.name(self.players.seat_of(symbol))
    }

    pub fn other_player_name(&self) -> &str {
        self.winner_name(Symbol::O)
    }

    pub fn current_player_x_name(&self) -> &str {
        self.players.current_player_x_name()
    }

    /// Player 2 is the computer seat.
    pub fn is_computer_x(&self) -> bool {
        self.players.seat_of(Symbol::X) == Seat::Two
    }

    pub fn is_computer_turn(&self) -> bool {
        self.players.vs_computer()
            && !self.is_round_over
            && self.players.seat_of(self.current_turn_symbol()) == Seat::Two
    }

    pub fn current_turn_symbol(&self) -> Symbol {
        if self.is_player_x_turn {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    pub fn current_turn_name(&self) -> &str {
        self.winner_name(self.current_turn_symbol())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn is_player_x_turn(&self) -> bool {
        self.is_player_x_turn
    }

    pub fn is_round_over(&self) -> bool {
        self.is_round_over
    }

    pub fn players(&self) -> &PlayerConfig {
        &self.players
    }

    pub fn vs_computer(&self) -> bool {
        self.players.vs_computer()
    }

    pub fn player1_name(&self) -> &str {
        self.players.player1_name()
    }

    pub fn player2_name(&self) -> &str {
        self.players.player2_name()
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn player1_score(&self) -> u32 {
        self.scores.player1()
    }

    pub fn player2_score(&self) -> u32 {
        self.scores.player2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::models::LineType;

    struct FirstEmpty;

    impl CellChooser for FirstEmpty {
        fn choose(&mut self, empties: &[Position]) -> Position {
            empties[0]
        }
    }

    fn engine() -> GameEngine<FirstEmpty> {
        let mut engine = GameEngine::with_chooser(FirstEmpty);
        engine.configure_game("Ann", "Bob", "Ann", false);
        engine
    }

    fn play(engine: &mut GameEngine<FirstEmpty>, row: usize, col: usize) -> RoundResult {
        assert!(engine.apply_move(row, col), "({row}, {col}) should be legal");
        engine.switch_turn();
        engine.evaluate_round()
    }

    #[test]
    fn defaults_match_single_player_setup() {
        let engine = GameEngine::with_chooser(FirstEmpty);
        assert_eq!(engine.player1_name(), "Player1");
        assert_eq!(engine.player2_name(), "Computer");
        assert!(engine.vs_computer());
        assert_eq!(engine.current_player_x_name(), "Player1");
        assert!(engine.is_player_x_turn());
        assert!(!engine.is_round_over());
        assert_eq!((engine.player1_score(), engine.player2_score()), (0, 0));
    }

    #[test]
    fn default_engine_plays_against_computer() {
        let engine: GameEngine = GameEngine::default();
        assert!(engine.vs_computer());
        assert!(!engine.is_computer_x());
        assert_eq!(engine.other_player_name(), "Computer");
    }

    #[test]
    fn apply_move_does_not_switch_turn() {
        let mut engine = engine();
        assert!(engine.apply_move(0, 0));
        assert_eq!(engine.cell(0, 0), Some(Cell::X));
        assert!(engine.is_player_x_turn());
        assert!(!engine.apply_move(0, 0));
        engine.switch_turn();
        assert!(engine.apply_move(0, 1));
        assert_eq!(engine.cell(0, 1), Some(Cell::O));
    }

    #[test]
    fn out_of_range_move_is_rejected() {
        let mut engine = engine();
        assert!(!engine.apply_move(3, 0));
        assert!(!engine.apply_move(0, 3));
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn win_credits_the_player_holding_the_symbol() {
        let mut engine = engine();
        engine.switch_starting_player();
        engine.start_round();
        assert_eq!(engine.current_player_x_name(), "Bob");

        assert_eq!(play(&mut engine, 0, 0), RoundResult::Ongoing);
        assert_eq!(play(&mut engine, 1, 0), RoundResult::Ongoing);
        assert_eq!(play(&mut engine, 0, 1), RoundResult::Ongoing);
        assert_eq!(play(&mut engine, 1, 1), RoundResult::Ongoing);
        let result = play(&mut engine, 0, 2);

        assert_eq!(
            result,
            RoundResult::Winner {
                symbol: Symbol::X,
                line_type: LineType::Horizontal,
                line_index: 0
            }
        );
        assert!(engine.is_round_over());
        assert_eq!(engine.winner_name(Symbol::X), "Bob");
        assert_eq!((engine.player1_score(), engine.player2_score()), (0, 1));
    }

    #[test]
    fn scores_survive_rounds_and_reset_on_configure() {
        let mut engine = engine();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            play(&mut engine, row, col);
        }
        assert_eq!(engine.player1_score(), 1);

        engine.switch_starting_player();
        engine.start_round();
        assert_eq!(engine.player1_score(), 1);
        assert!(engine.is_player_x_turn());
        assert!(!engine.is_round_over());
        assert_eq!(engine.board(), &Board::new());

        engine.configure_game("Ann", "Bob", "Bob", false);
        assert_eq!((engine.player1_score(), engine.player2_score()), (0, 0));
        assert_eq!(engine.current_player_x_name(), "Bob");
    }

    #[test]
    fn seated_configuration_with_equal_names() {
        let mut engine = GameEngine::with_chooser(FirstEmpty);
        engine.configure_game_seated("Sam", "Sam", Seat::Two, true);
        assert!(engine.is_computer_x());
        assert!(engine.is_computer_turn());
        assert_eq!(engine.players().seat_of(Symbol::X), Seat::Two);
        assert_eq!((engine.player1_score(), engine.player2_score()), (0, 0));
    }

    #[test]
    fn computer_turn_follows_the_o_role() {
        let mut engine = GameEngine::with_chooser(FirstEmpty);
        engine.configure_game("Ann", "Computer", "Ann", true);
        assert!(!engine.is_computer_x());
        assert!(!engine.is_computer_turn());
        engine.switch_turn();
        assert!(engine.is_computer_turn());

        engine.configure_game("Ann", "Computer", "Computer", true);
        assert!(engine.is_computer_x());
        assert!(engine.is_computer_turn());
        assert_eq!(engine.compute_computer_move(), (0, 0));
    }

    #[test]
    fn no_computer_turn_in_two_player_mode() {
        let mut engine = engine();
        engine.switch_turn();
        assert!(!engine.is_computer_turn());
    }

    #[test]
    fn turn_name_tracks_role() {
        let mut engine = engine();
        assert_eq!(engine.current_turn_name(), "Ann");
        engine.switch_turn();
        assert_eq!(engine.current_turn_name(), "Bob");
        assert_eq!(engine.other_player_name(), "Bob");
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn computer_move_on_full_board_panics() {
        let mut engine = engine();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            assert!(engine.apply_move(row, col));
            engine.switch_turn();
        }
        engine.compute_computer_move();
    }
}
