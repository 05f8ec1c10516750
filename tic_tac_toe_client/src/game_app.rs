use eframe::egui;
use tic_tac_toe_engine::{Cell, GameEngine, RandomChooser, RoundResult, WinningLine};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::setup::PlayerSetup;

const X_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);
const CELL_SIZE: f32 = 100.0;

pub struct GameApp {
    engine: GameEngine,
    setup: Option<PlayerSetup>,
    round_message: Option<String>,
    winning_line: Option<WinningLine>,
}

impl GameApp {
    pub fn new(config: &AppConfig) -> Self {
        let chooser = match config.seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::from_entropy(),
        };
        let mut app = GameApp {
            engine: GameEngine::with_chooser(chooser),
            setup: None,
            round_message: None,
            winning_line: None,
        };
        app.start_game(PlayerSetup::from_config(config));
        app
    }

    fn start_game(&mut self, setup: PlayerSetup) {
        self.engine.configure_game_seated(
            setup.player1_name.clone(),
            setup.player2_name.clone(),
            setup.x_seat(),
            setup.vs_computer,
        );
        self.round_message = None;
        self.winning_line = None;
        self.play_computer_if_due();
    }

    fn accepts_clicks(&self) -> bool {
        self.setup.is_none()
            && self.round_message.is_none()
            && !self.engine.is_round_over()
            && !self.engine.is_computer_turn()
    }

    fn handle_cell_click(&mut self, row: usize, col: usize) {
        if !self.accepts_clicks() {
            return;
        }
        if !self.engine.apply_move(row, col) {
            debug!("Ignoring click on occupied cell ({}, {}).", row, col);
            return;
        }
        self.finish_move();
        self.play_computer_if_due();
    }

    fn play_computer_if_due(&mut self) {
        if !self.engine.is_computer_turn() {
            return;
        }
        let (row, col) = self.engine.compute_computer_move();
        if self.engine.apply_move(row, col) {
            self.finish_move();
        } else {
            warn!("Computer move ({}, {}) was rejected.", row, col);
        }
    }

    fn finish_move(&mut self) {
        self.engine.switch_turn();
        match self.engine.evaluate_round() {
            RoundResult::Winner {
                symbol,
                line_type,
                line_index,
            } => {
                let name = self.engine.winner_name(symbol).to_string();
                self.winning_line = Some(WinningLine {
                    symbol,
                    line_type,
                    line_index,
                });
                self.round_message = Some(format!("{} wins!", name));
            }
            RoundResult::Draw => {
                self.round_message = Some("It's a draw!".to_string());
            }
            RoundResult::Ongoing => {}
        }
    }

    fn next_round(&mut self) {
        self.round_message = None;
        self.winning_line = None;
        self.engine.switch_starting_player();
        self.engine.start_round();
        info!(
            "Next round: {} plays X.",
            self.engine.current_player_x_name()
        );
        self.play_computer_if_due();
    }

    fn score_text(&self) -> String {
        format!(
            "{}: {}   {}: {}",
            self.engine.player1_name(),
            self.engine.player1_score(),
            self.engine.player2_name(),
            self.engine.player2_score()
        )
    }

    fn turn_text(&self) -> String {
        format!(
            "Turn: {} ({})",
            self.engine.current_turn_name(),
            self.engine.current_turn_symbol()
        )
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        let accepts_clicks = self.accepts_clicks();

        ui.vertical_centered(|ui| {
            for row in 0..3 {
                ui.horizontal(|ui| {
                    ui.add_space(40.0);
                    for col in 0..3 {
                        let cell = self.engine.cell(row, col).unwrap_or_default();
                        let text = match cell {
                            Cell::X => egui::RichText::new("X").size(50.0).color(X_COLOR),
                            Cell::O => egui::RichText::new("O").size(50.0).color(O_COLOR),
                            Cell::Empty => egui::RichText::new(" ").size(50.0),
                        };

                        let mut button =
                            egui::Button::new(text).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                        if self
                            .winning_line
                            .is_some_and(|line| line.contains((row, col)))
                        {
                            button = button.fill(LINE_COLOR);
                        }

                        let enabled = accepts_clicks && cell.is_empty();
                        if ui.add_enabled(enabled, button).clicked() {
                            clicked = Some((row, col));
                        }
                    }
                });
            }
        });

        if let Some((row, col)) = clicked {
            self.handle_cell_click(row, col);
        }
    }

    fn show_round_over(&mut self, ctx: &egui::Context) {
        let Some(message) = self.round_message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Round Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).size(24.0));
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.next_round();
        }
    }

    fn show_setup(&mut self, ctx: &egui::Context) {
        let Some(setup) = self.setup.as_mut() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Player Setup")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Player 1:");
                ui.text_edit_singleline(&mut setup.player1_name);
                ui.add_space(5.0);

                ui.label("Player 2:");
                ui.add_enabled(
                    !setup.vs_computer,
                    egui::TextEdit::singleline(&mut setup.player2_name),
                );
                if ui
                    .checkbox(&mut setup.vs_computer, "Play against computer")
                    .changed()
                {
                    setup.on_computer_toggled();
                }
                ui.add_space(5.0);

                ui.label("Starts as X:");
                let player1_label = format!("{} (player 1)", setup.player1_name);
                let player2_label = format!("{} (player 2)", setup.player2_name);
                ui.radio_value(&mut setup.player1_starts, true, player1_label);
                ui.radio_value(&mut setup.player1_starts, false, player2_label);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            if let Some(setup) = self.setup.take() {
                self.start_game(setup);
            }
        } else if cancelled {
            self.setup = None;
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.group(|ui| {
                    ui.set_width(400.0);

                    if ui
                        .add_enabled(
                            self.setup.is_none(),
                            egui::Button::new("New Game").min_size(egui::vec2(100.0, 30.0)),
                        )
                        .clicked()
                    {
                        self.setup = Some(PlayerSetup::from_engine(&self.engine));
                    }
                    ui.add_space(10.0);

                    ui.label(
                        egui::RichText::new(self.score_text())
                            .size(24.0)
                            .color(egui::Color32::from_rgb(0, 191, 255)),
                    );
                    ui.add_space(5.0);
                    ui.label(egui::RichText::new(self.turn_text()).size(20.0));
                    ui.add_space(10.0);

                    self.render_board(ui);
                });
            });
        });

        self.show_round_over(ctx);
        self.show_setup(ctx);
    }
}
