//! Game state management for the Fanorona GUI
//!
//! Translates board clicks into engine requests and keeps the bits of
//! presentation state (selection, last move, status message) the engine
//! does not track.

use tracing::debug;

use crate::rules::moves_from;
use crate::{
    CaptureDirection, Game, GameConfig, LegalMove, MoveOutcome, Phase, Player, Pos, RejectionKind,
};

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub selected: Option<Pos>,
    pub last_move: Option<(Pos, Pos)>,
    pub last_captured: Vec<Pos>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::with_config(config),
            config,
            selected: None,
            last_move: None,
            last_captured: Vec::new(),
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Start over with different rule options
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.turn()
    }

    /// Runs offered by a pending double capture
    pub fn pending_runs(&self) -> Option<(&[Pos], &[Pos])> {
        match self.game.phase() {
            Phase::AwaitingDirectionChoice(pending) => {
                Some((pending.approach.as_slice(), pending.withdrawal.as_slice()))
            }
            _ => None,
        }
    }

    /// Legal steps for the selected piece
    pub fn selected_moves(&self) -> Vec<LegalMove> {
        match (self.game.phase(), self.selected) {
            (Phase::AwaitingMove, Some(from)) => {
                moves_from(self.game.board(), self.current_turn(), from)
            }
            _ => Vec::new(),
        }
    }

    /// Short description of what the player should do next
    pub fn status(&self) -> &'static str {
        match self.game.phase() {
            Phase::AwaitingMove if self.selected.is_some() => "Pick a destination",
            Phase::AwaitingMove => "Select a piece",
            Phase::AwaitingDirectionChoice(_) => "Choose approach or withdrawal",
            Phase::AwaitingRecaptureOrStop(_) => "Capture again or stop",
            Phase::GameOver { .. } => "Game Over",
        }
    }

    /// React to a click on a board point
    pub fn handle_click(&mut self, pos: Pos) {
        let result = match self.game.phase() {
            Phase::GameOver { .. } => return,
            Phase::AwaitingDirectionChoice(pending) => {
                if pending.approach.contains(&pos) {
                    self.game.choose_direction(CaptureDirection::Approach)
                } else if pending.withdrawal.contains(&pos) {
                    self.game.choose_direction(CaptureDirection::Withdrawal)
                } else {
                    self.message = Some("Click a highlighted piece to choose".to_string());
                    return;
                }
            }
            Phase::AwaitingRecaptureOrStop(chain) => {
                let active = chain.position();
                if active == pos {
                    return;
                }
                // Another own piece: name the chain rule, not the occupied point
                if self.game.board().get(pos).is_owned_by(self.current_turn()) {
                    self.message = Some(RejectionKind::NotTheActivePieceInChain.to_string());
                    return;
                }
                self.game.attempt_recapture(pos)
            }
            Phase::AwaitingMove => {
                if self.game.board().get(pos).is_owned_by(self.current_turn()) {
                    self.selected = Some(pos);
                    self.message = None;
                    return;
                }
                let Some(from) = self.selected else {
                    return;
                };
                self.game.attempt_move(from, pos)
            }
        };
        self.apply(result);
    }

    /// Resolve a pending double capture from the side panel
    pub fn choose(&mut self, direction: CaptureDirection) {
        let result = self.game.choose_direction(direction);
        self.apply(result);
    }

    /// End the current chain
    pub fn stop_chain(&mut self) {
        match self.game.stop_chain() {
            Ok(()) => self.message = None,
            Err(kind) => self.message = Some(kind.to_string()),
        }
    }

    fn apply(&mut self, result: Result<MoveOutcome, RejectionKind>) {
        match result {
            Ok(outcome) => {
                debug!(?outcome, "request accepted");
                self.selected = None;
                self.message = None;
                match outcome {
                    MoveOutcome::Applied(report) => {
                        self.last_move = Some((report.from, report.to));
                        self.last_captured = report.captured().to_vec();
                    }
                    MoveOutcome::AppliedAwaitingDirection { .. } => {
                        if let Phase::AwaitingDirectionChoice(pending) = self.game.phase() {
                            self.last_move = Some((pending.from, pending.to));
                        }
                        self.last_captured.clear();
                    }
                    MoveOutcome::GameOver { .. } => {}
                }
            }
            Err(kind) => self.message = Some(kind.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell};

    #[test]
    fn test_click_select_then_move() {
        let mut state = GameState::new(GameConfig::default());
        state.handle_click(Pos::new(3, 4));
        assert_eq!(state.selected, Some(Pos::new(3, 4)));
        assert_eq!(state.selected_moves().len(), 1);

        state.handle_click(Pos::new(2, 4));
        assert_eq!(state.selected, None);
        assert_eq!(state.last_captured, vec![Pos::new(1, 4), Pos::new(0, 4)]);
        assert_eq!(state.current_turn(), Player::Black);
    }

    #[test]
    fn test_rejected_click_sets_message() {
        let mut state = GameState::new(GameConfig::default());
        state.handle_click(Pos::new(3, 0));
        // Occupied by Black
        state.handle_click(Pos::new(2, 0));
        assert!(state.message.is_some());
        assert_eq!(state.current_turn(), Player::White);
    }

    #[test]
    fn test_click_other_piece_during_chain() {
        let mut board = Board::empty();
        board.place(Pos::new(2, 3), Cell::White);
        board.place(Pos::new(4, 0), Cell::White);
        for pos in [Pos::new(2, 5), Pos::new(2, 6), Pos::new(4, 4)] {
            board.place(pos, Cell::Black);
        }
        let mut state = GameState::new(GameConfig::default());
        state.game = Game::from_board(board, Player::White, GameConfig::default());

        state.handle_click(Pos::new(2, 3));
        state.handle_click(Pos::new(2, 4));
        assert!(state.game.chain().is_some());

        state.handle_click(Pos::new(4, 0));
        assert_eq!(
            state.message.as_deref(),
            Some(RejectionKind::NotTheActivePieceInChain.to_string().as_str())
        );
        assert_eq!(state.game.chain().map(|c| c.position()), Some(Pos::new(2, 4)));
        assert_eq!(state.current_turn(), Player::White);
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = GameConfig::default().with_mandatory_capture(true);
        let mut state = GameState::new(config);
        state.handle_click(Pos::new(3, 4));
        state.reset();
        assert_eq!(state.selected, None);
        assert!(state.game.config().mandatory_capture);
    }
}
