//! Main application for the Fanorona GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{CaptureDirection, GameConfig, Phase, Player};
use super::board_view::{BoardView, Highlights};
use super::game_state::GameState;
use super::theme::*;

/// Main Fanorona application
pub struct FanoronaApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for FanoronaApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameConfig::default()),
            board_view: BoardView::default(),
        }
    }
}

impl FanoronaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();

                    // Rule changes start a fresh game
                    let mut config = self.state.config;
                    let mut changed = ui
                        .checkbox(&mut config.mandatory_capture, "Mandatory capture")
                        .changed();
                    changed |= ui
                        .checkbox(&mut config.forbid_repeated_direction, "No repeated chain direction")
                        .changed();
                    if changed {
                        self.state.set_config(config);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (white, black) = self.state.game.piece_counts();
                    ui.label(format!("White {}  ·  Black {}", white, black));
                });
            });
        });
    }

    /// Render the side panel with game info and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(winner) = self.state.game.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("FANORONA").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("approach · withdrawal").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, name) = match turn {
                Player::White => (WHITE_PIECE, "WHITE"),
                Player::Black => (BLACK_PIECE, "BLACK"),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                    let color = match self.state.game.phase() {
                        Phase::AwaitingMove => STATUS_NORMAL,
                        Phase::GameOver { .. } => WIN_HIGHLIGHT,
                        _ => STATUS_WARNING,
                    };
                    ui.label(RichText::new(self.state.status()).size(12.0).color(color));
                });
            });
        });
    }

    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (white, black) = self.state.game.piece_counts();
            for (label, count) in [("White", white), ("Black", black)] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}/22", count)).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            match self.state.game.phase() {
                Phase::AwaitingDirectionChoice(_) => {
                    ui.horizontal(|ui| {
                        btn_frame.show(ui, |ui| {
                            let label = RichText::new("Approach (A)").size(12.0).color(APPROACH_RUN);
                            if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                                self.state.choose(CaptureDirection::Approach);
                            }
                        });
                        ui.add_space(4.0);
                        btn_frame.show(ui, |ui| {
                            let label = RichText::new("Withdrawal (W)").size(12.0).color(WITHDRAWAL_RUN);
                            if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                                self.state.choose(CaptureDirection::Withdrawal);
                            }
                        });
                    });
                }
                Phase::AwaitingRecaptureOrStop(_) => {
                    btn_frame.show(ui, |ui| {
                        let label = RichText::new("Stop capturing (S)").size(12.0).color(TEXT_PRIMARY);
                        if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                            self.state.stop_chain();
                        }
                    });
                }
                _ => {
                    btn_frame.show(ui, |ui| {
                        let label = RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY);
                        if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                            self.state.reset();
                        }
                    });
                }
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Turn #{}", self.state.game.history().len() + 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui, winner: Player) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(winner.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let (approach, withdrawal) = self.state.pending_runs().unwrap_or_default();
            let destinations = self
                .state
                .selected_moves()
                .into_iter()
                .map(|mv| (mv.to, mv.is_capture()))
                .collect();
            let highlights = Highlights {
                selected: self.state.selected,
                last_move: self.state.last_move,
                destinations,
                chain_targets: self.state.game.chain_targets(),
                approach,
                withdrawal,
                winner: self.state.game.winner(),
            };

            let board = self.state.game.snapshot();
            let clicked = self.board_view.show(ui, &board, &highlights);

            if let Some(pos) = clicked {
                self.state.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, stop, approach, withdrawal) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::W),
            )
        });

        if new_game {
            self.state.reset();
        }
        if stop && self.state.game.chain().is_some() {
            self.state.stop_chain();
        }
        if self.state.pending_runs().is_some() {
            if approach {
                self.state.choose(CaptureDirection::Approach);
            } else if withdrawal {
                self.state.choose(CaptureDirection::Withdrawal);
            }
        }
    }
}

impl eframe::App for FanoronaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
