//! Capture resolution: approach and withdrawal
//!
//! A piece moving one step from `from` to `to` in direction `d` captures
//! either by approach (the contiguous opponent run starting at `to + d`)
//! or by withdrawal (the contiguous opponent run starting at `from - d`).
//! Only one of the two runs is ever removed for a single move.

use crate::board::{Board, Player, Pos};

use super::intersection::Step;

/// Which side of the move a capture is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureDirection {
    /// Run beyond the destination, in the direction of travel
    Approach,
    /// Run behind the origin, away from the direction of travel
    Withdrawal,
}

impl CaptureDirection {
    pub fn name(self) -> &'static str {
        match self {
            CaptureDirection::Approach => "approach",
            CaptureDirection::Withdrawal => "withdrawal",
        }
    }
}

/// Capture outcome of a single legal step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Nothing captured
    None,
    /// Exactly one run is non-empty and is taken automatically
    Single {
        direction: CaptureDirection,
        positions: Vec<Pos>,
    },
    /// Both runs are non-empty; the mover picks one
    Choice {
        approach: Vec<Pos>,
        withdrawal: Vec<Pos>,
    },
}

impl CaptureOutcome {
    /// Build the outcome from the two independently computed runs
    pub fn from_runs(approach: Vec<Pos>, withdrawal: Vec<Pos>) -> Self {
        match (approach.is_empty(), withdrawal.is_empty()) {
            (true, true) => CaptureOutcome::None,
            (false, true) => CaptureOutcome::Single {
                direction: CaptureDirection::Approach,
                positions: approach,
            },
            (true, false) => CaptureOutcome::Single {
                direction: CaptureDirection::Withdrawal,
                positions: withdrawal,
            },
            (false, false) => CaptureOutcome::Choice {
                approach,
                withdrawal,
            },
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !matches!(self, CaptureOutcome::None)
    }

    /// Positions removed when `direction` is taken, if that run exists
    pub fn run(&self, direction: CaptureDirection) -> Option<&[Pos]> {
        match (self, direction) {
            (CaptureOutcome::Single { direction: d, positions }, _) if *d == direction => {
                Some(positions.as_slice())
            }
            (CaptureOutcome::Choice { approach, .. }, CaptureDirection::Approach) => {
                Some(approach.as_slice())
            }
            (CaptureOutcome::Choice { withdrawal, .. }, CaptureDirection::Withdrawal) => {
                Some(withdrawal.as_slice())
            }
            _ => None,
        }
    }
}

/// Walk from `start` in `step` collecting consecutive opponent pieces.
///
/// Stops at the first empty cell, own piece, or board edge.
pub fn capture_run(board: &Board, start: Pos, step: Step, player: Player) -> Vec<Pos> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut pos = start;

    while pos.is_valid() && board.get(pos).is_owned_by(opponent) {
        run.push(pos);
        pos = step.apply(pos);
    }

    run
}

/// Approach run for a step `from -> to`
#[inline]
pub fn approach_run(board: &Board, to: Pos, step: Step, player: Player) -> Vec<Pos> {
    capture_run(board, step.apply(to), step, player)
}

/// Withdrawal run for a step `from -> to`
#[inline]
pub fn withdrawal_run(board: &Board, from: Pos, step: Step, player: Player) -> Vec<Pos> {
    let back = step.reversed();
    capture_run(board, back.apply(from), back, player)
}

/// Compute both runs for a unit step and combine them.
///
/// Neither run includes `from` or `to`, so the result is the same whether
/// the board is taken before or after the piece moves.
pub fn resolve_captures(board: &Board, player: Player, from: Pos, to: Pos) -> CaptureOutcome {
    let step = Step::between(from, to);
    debug_assert!(step.is_unit());

    let approach = approach_run(board, to, step, player);
    let withdrawal = withdrawal_run(board, from, step, player);
    CaptureOutcome::from_runs(approach, withdrawal)
}

/// Check if a step would capture anything, without allocating the runs
#[inline]
pub fn has_capture(board: &Board, player: Player, from: Pos, to: Pos) -> bool {
    let step = Step::between(from, to);
    let opponent = player.opponent();
    board.get(step.apply(to)).is_owned_by(opponent)
        || board.get(step.reversed().apply(from)).is_owned_by(opponent)
}
