//! Move validation
//!
//! Turns a `(player, from, to)` request into a [`LegalMove`] or the first
//! rule it breaks. Validation never touches the board.

use thiserror::Error;

use crate::board::{Board, Cell, Player, Pos};

use super::capture::{resolve_captures, CaptureOutcome};
use super::intersection::{classify, Step};

/// Why a request was refused. The game is unchanged whenever one of
/// these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    #[error("position is off the board")]
    OutOfBounds,
    #[error("players must move their own pieces")]
    WrongOwner,
    #[error("destination is already occupied")]
    DestinationOccupied,
    #[error("pieces move exactly one point at a time")]
    NotUnitStep,
    #[error("weak intersections only allow orthogonal moves")]
    DisallowedDirectionForIntersection,
    #[error("a chain move must capture")]
    MustCaptureToRecapture,
    #[error("the chain already visited that point")]
    SquareAlreadyVisitedInChain,
    #[error("only the capturing piece may continue the chain")]
    NotTheActivePieceInChain,
    #[error("the game is over")]
    GameAlreadyOver,
    #[error("a capture direction must be chosen first")]
    DirectionChoicePending,
    #[error("no capture direction is waiting to be chosen")]
    NoPendingDirectionChoice,
    #[error("no capture chain is in progress")]
    NoActiveChain,
    #[error("a capture is available and must be played")]
    CaptureAvailable,
    #[error("a chain may not continue in the same direction twice")]
    RepeatedChainDirection,
}

/// A validated single step with its capture outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMove {
    pub player: Player,
    pub from: Pos,
    pub to: Pos,
    pub step: Step,
    pub capture: CaptureOutcome,
}

impl LegalMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture.is_capture()
    }
}

/// Validate a move for `player`.
///
/// Checks run in a fixed order and stop at the first failure:
/// bounds, ownership, empty destination, unit step, intersection
/// strength. A passing request is handed to the capture resolver.
pub fn validate_move(
    board: &Board,
    player: Player,
    from: Pos,
    to: Pos,
) -> Result<LegalMove, RejectionKind> {
    // Bounds first, for both ends, before any ownership check
    let (Ok(mover), Ok(target)) = (board.occupant(from), board.occupant(to)) else {
        return Err(RejectionKind::OutOfBounds);
    };

    if !mover.is_owned_by(player) {
        return Err(RejectionKind::WrongOwner);
    }

    if target != Cell::Empty {
        return Err(RejectionKind::DestinationOccupied);
    }

    let step = Step::between(from, to);
    if !step.is_unit() {
        return Err(RejectionKind::NotUnitStep);
    }

    if !classify(from).allows(step) {
        return Err(RejectionKind::DisallowedDirectionForIntersection);
    }

    Ok(LegalMove {
        player,
        from,
        to,
        step,
        capture: resolve_captures(board, player, from, to),
    })
}
