//! Turn and chain state machine
//!
//! A [`Game`] owns the board and walks every turn through
//! `AwaitingMove -> AwaitingDirectionChoice? -> AwaitingRecaptureOrStop*`
//! until the turn passes or one side runs out of pieces. Every request is
//! handled to completion before returning; a rejected request leaves the
//! game exactly as it was.

mod chain;

#[cfg(test)]
mod tests;

pub use chain::Chain;

use tracing::{debug, info, instrument};

use crate::board::{Board, Cell, Player, Pos};
use crate::config::GameConfig;
use crate::rules::{
    has_any_capture, validate_move, CaptureDirection, CaptureOutcome, LegalMove, RejectionKind,
};

/// Pieces removed by one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub direction: CaptureDirection,
    pub positions: Vec<Pos>,
}

/// A completed move. Chain continuations made by the same piece in the
/// same turn are kept in `recaptures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Player,
    pub from: Pos,
    pub to: Pos,
    pub capture: Option<Capture>,
    pub recaptures: Vec<PlayedMove>,
}

impl PlayedMove {
    /// Total pieces removed by this move and its recaptures
    pub fn captured_count(&self) -> usize {
        self.capture.as_ref().map_or(0, |c| c.positions.len())
            + self.recaptures.iter().map(PlayedMove::captured_count).sum::<usize>()
    }
}

/// Result of one applied step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub from: Pos,
    pub to: Pos,
    pub capture: Option<Capture>,
    /// The same piece may capture again; the turn waits for a recapture or stop
    pub chain_continues: bool,
}

impl StepReport {
    /// Positions removed by this step (empty for a plain move)
    pub fn captured(&self) -> &[Pos] {
        self.capture
            .as_ref()
            .map(|c| c.positions.as_slice())
            .unwrap_or(&[])
    }
}

/// Outcome of an accepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step was applied and any capture resolved
    Applied(StepReport),
    /// The piece moved but both capture runs are available; call
    /// [`Game::choose_direction`] to pick one
    AppliedAwaitingDirection {
        approach: Vec<Pos>,
        withdrawal: Vec<Pos>,
    },
    /// The last capture emptied the board of the opponent's pieces
    GameOver { winner: Player },
}

/// A step whose capture direction is still undecided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChoice {
    pub from: Pos,
    pub to: Pos,
    pub approach: Vec<Pos>,
    pub withdrawal: Vec<Pos>,
    chain: Chain,
    recapture: bool,
}

/// Where the current turn stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    AwaitingDirectionChoice(PendingChoice),
    AwaitingRecaptureOrStop(Chain),
    GameOver { winner: Player },
}

/// A game of Fanorona
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    phase: Phase,
    history: Vec<PlayedMove>,
    config: GameConfig,
}

impl Game {
    /// New game from the opening position, White to move
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::new(), config.first_player, config)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, to_move: Player, config: GameConfig) -> Self {
        let phase = match Self::winner_on(&board) {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingMove,
        };
        Self {
            board,
            turn: to_move,
            phase,
            history: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the board for rendering
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Side to move (during a chain, the side that is capturing)
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Piece counts as `(white, black)`
    #[inline]
    pub fn piece_counts(&self) -> (u32, u32) {
        self.board.count_pieces()
    }

    /// The active chain, if a recapture or stop is awaited
    pub fn chain(&self) -> Option<&Chain> {
        match &self.phase {
            Phase::AwaitingRecaptureOrStop(chain) => Some(chain),
            _ => None,
        }
    }

    /// Capturing destinations open to the chain's piece
    pub fn chain_targets(&self) -> &[Pos] {
        self.chain().map(Chain::targets).unwrap_or(&[])
    }

    /// Validate a move for the side to move without applying it
    pub fn validate(&self, from: Pos, to: Pos) -> Result<LegalMove, RejectionKind> {
        validate_move(&self.board, self.turn, from, to)
    }

    /// Start a turn by moving the piece on `from` to `to`.
    ///
    /// While a chain is active, a request for the chain's piece is treated
    /// as a recapture; any other piece is refused.
    #[instrument(skip(self), level = "debug")]
    pub fn attempt_move(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, RejectionKind> {
        self.try_move(from, to)
            .inspect_err(|kind| debug!(%kind, %from, %to, "move rejected"))
    }

    /// Pick which run a pending double capture removes
    #[instrument(skip(self), level = "debug")]
    pub fn choose_direction(
        &mut self,
        choice: CaptureDirection,
    ) -> Result<MoveOutcome, RejectionKind> {
        self.try_choose(choice)
            .inspect_err(|kind| debug!(%kind, "direction choice rejected"))
    }

    /// Continue the chain by moving its piece to `to`
    #[instrument(skip(self), level = "debug")]
    pub fn attempt_recapture(&mut self, to: Pos) -> Result<MoveOutcome, RejectionKind> {
        self.try_recapture(to)
            .inspect_err(|kind| debug!(%kind, %to, "recapture rejected"))
    }

    /// Decline further captures and pass the turn
    #[instrument(skip(self), level = "debug")]
    pub fn stop_chain(&mut self) -> Result<(), RejectionKind> {
        if self.chain().is_none() {
            let kind = Self::no_chain_rejection(&self.phase);
            debug!(%kind, "stop rejected");
            return Err(kind);
        }
        self.end_turn();
        Ok(())
    }

    fn try_move(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, RejectionKind> {
        match &self.phase {
            Phase::AwaitingMove => {}
            Phase::GameOver { .. } => return Err(RejectionKind::GameAlreadyOver),
            Phase::AwaitingDirectionChoice(_) => return Err(RejectionKind::DirectionChoicePending),
            Phase::AwaitingRecaptureOrStop(chain) => {
                if from != chain.position() {
                    return Err(RejectionKind::NotTheActivePieceInChain);
                }
                return self.try_recapture(to);
            }
        }

        let mv = self.validate(from, to)?;
        if self.config.mandatory_capture
            && !mv.is_capture()
            && has_any_capture(&self.board, self.turn)
        {
            return Err(RejectionKind::CaptureAvailable);
        }

        Ok(self.play_step(mv, Chain::new(from), false))
    }

    fn try_recapture(&mut self, to: Pos) -> Result<MoveOutcome, RejectionKind> {
        let chain = match std::mem::replace(&mut self.phase, Phase::AwaitingMove) {
            Phase::AwaitingRecaptureOrStop(chain) => chain,
            other => {
                let kind = Self::no_chain_rejection(&other);
                self.phase = other;
                return Err(kind);
            }
        };

        match self.check_recapture(&chain, to) {
            Ok(mv) => Ok(self.play_step(mv, chain, true)),
            Err(kind) => {
                self.phase = Phase::AwaitingRecaptureOrStop(chain);
                Err(kind)
            }
        }
    }

    /// Chain steps must be legal moves of the chain's piece, must not
    /// revisit a point, and must capture
    fn check_recapture(&self, chain: &Chain, to: Pos) -> Result<LegalMove, RejectionKind> {
        let mv = validate_move(&self.board, self.turn, chain.position(), to)?;
        if chain.has_visited(to) {
            return Err(RejectionKind::SquareAlreadyVisitedInChain);
        }
        if self.config.forbid_repeated_direction && chain.last_step() == Some(mv.step) {
            return Err(RejectionKind::RepeatedChainDirection);
        }
        if !mv.is_capture() {
            return Err(RejectionKind::MustCaptureToRecapture);
        }
        Ok(mv)
    }

    fn try_choose(&mut self, choice: CaptureDirection) -> Result<MoveOutcome, RejectionKind> {
        let pending = match std::mem::replace(&mut self.phase, Phase::AwaitingMove) {
            Phase::AwaitingDirectionChoice(pending) => pending,
            other => {
                let kind = match other {
                    Phase::GameOver { .. } => RejectionKind::GameAlreadyOver,
                    _ => RejectionKind::NoPendingDirectionChoice,
                };
                self.phase = other;
                return Err(kind);
            }
        };

        // Only the chosen run is removed; the other stays on the board
        let positions = match choice {
            CaptureDirection::Approach => pending.approach,
            CaptureDirection::Withdrawal => pending.withdrawal,
        };
        let capture = Capture {
            direction: choice,
            positions,
        };
        Ok(self.resolve(pending.from, pending.to, capture, pending.chain, pending.recapture))
    }

    /// Move the piece and dispatch on the capture outcome
    fn play_step(&mut self, mv: LegalMove, mut chain: Chain, recapture: bool) -> MoveOutcome {
        let player = mv.player;
        self.board.place(mv.from, Cell::Empty);
        self.board.place(mv.to, Cell::from(player));
        chain.advance(mv.to, mv.step);
        debug!(player = player.name(), from = %mv.from, to = %mv.to, "piece moved");

        match mv.capture {
            CaptureOutcome::None => {
                self.record(
                    PlayedMove {
                        player,
                        from: mv.from,
                        to: mv.to,
                        capture: None,
                        recaptures: Vec::new(),
                    },
                    recapture,
                );
                self.end_turn();
                MoveOutcome::Applied(StepReport {
                    from: mv.from,
                    to: mv.to,
                    capture: None,
                    chain_continues: false,
                })
            }
            CaptureOutcome::Single {
                direction,
                positions,
            } => self.resolve(mv.from, mv.to, Capture { direction, positions }, chain, recapture),
            CaptureOutcome::Choice {
                approach,
                withdrawal,
            } => {
                debug!(
                    approach = approach.len(),
                    withdrawal = withdrawal.len(),
                    "awaiting capture direction"
                );
                self.phase = Phase::AwaitingDirectionChoice(PendingChoice {
                    from: mv.from,
                    to: mv.to,
                    approach: approach.clone(),
                    withdrawal: withdrawal.clone(),
                    chain,
                    recapture,
                });
                MoveOutcome::AppliedAwaitingDirection {
                    approach,
                    withdrawal,
                }
            }
        }
    }

    /// Remove a resolved run, then either end the game, continue the
    /// chain, or pass the turn
    fn resolve(
        &mut self,
        from: Pos,
        to: Pos,
        capture: Capture,
        mut chain: Chain,
        recapture: bool,
    ) -> MoveOutcome {
        let player = self.turn;
        self.board.remove_all(&capture.positions);
        debug!(
            player = player.name(),
            direction = capture.direction.name(),
            count = capture.positions.len(),
            "pieces captured"
        );

        self.record(
            PlayedMove {
                player,
                from,
                to,
                capture: Some(capture.clone()),
                recaptures: Vec::new(),
            },
            recapture,
        );

        if let Some(winner) = Self::winner_on(&self.board) {
            info!(winner = winner.name(), "game over");
            self.phase = Phase::GameOver { winner };
            return MoveOutcome::GameOver { winner };
        }

        chain.refresh_targets(&self.board, player, &self.config);
        let chain_continues = chain.can_continue();
        if chain_continues {
            self.phase = Phase::AwaitingRecaptureOrStop(chain);
        } else {
            self.end_turn();
        }

        MoveOutcome::Applied(StepReport {
            from,
            to,
            capture: Some(capture),
            chain_continues,
        })
    }

    fn record(&mut self, played: PlayedMove, recapture: bool) {
        match self.history.last_mut() {
            Some(first) if recapture => first.recaptures.push(played),
            _ => self.history.push(played),
        }
    }

    /// Rejection for a chain request made outside a chain
    fn no_chain_rejection(phase: &Phase) -> RejectionKind {
        match phase {
            Phase::GameOver { .. } => RejectionKind::GameAlreadyOver,
            Phase::AwaitingDirectionChoice(_) => RejectionKind::DirectionChoicePending,
            _ => RejectionKind::NoActiveChain,
        }
    }

    fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.phase = Phase::AwaitingMove;
        info!(turn = self.turn.name(), "turn passed");
    }

    /// The side left with pieces once the other has none
    fn winner_on(board: &Board) -> Option<Player> {
        match board.count_pieces() {
            (0, 0) => None,
            (_, 0) => Some(Player::White),
            (0, _) => Some(Player::Black),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
