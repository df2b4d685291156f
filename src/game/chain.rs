//! Capture chains
//!
//! After a capture the same piece may keep capturing within the turn.
//! The chain remembers where the piece has been so it never returns to a
//! point it already occupied this turn.

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::rules::{moves_from, Step};

/// State of the capturing piece during one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    position: Pos,
    visited: Vec<Pos>,
    last_step: Option<Step>,
    targets: Vec<Pos>,
}

impl Chain {
    /// Start a chain for a piece standing on `origin`
    pub fn new(origin: Pos) -> Self {
        Self {
            position: origin,
            visited: vec![origin],
            last_step: None,
            targets: Vec::new(),
        }
    }

    /// Current square of the chain's piece
    #[inline]
    pub fn position(&self) -> Pos {
        self.position
    }

    /// Squares occupied by the piece this turn, in order
    #[inline]
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    #[inline]
    pub fn has_visited(&self, pos: Pos) -> bool {
        self.visited.contains(&pos)
    }

    #[inline]
    pub fn last_step(&self) -> Option<Step> {
        self.last_step
    }

    /// Capturing destinations still open to the piece
    #[inline]
    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// Whether any further capture is available
    #[inline]
    pub fn can_continue(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Move the piece one step
    pub(crate) fn advance(&mut self, to: Pos, step: Step) {
        debug_assert!(!self.has_visited(to));
        self.position = to;
        self.visited.push(to);
        self.last_step = Some(step);
    }

    /// Recompute the capturing continuations on the current board
    pub(crate) fn refresh_targets(&mut self, board: &Board, player: Player, config: &GameConfig) {
        let targets = moves_from(board, player, self.position)
            .into_iter()
            .filter(|mv| mv.is_capture())
            .filter(|mv| !self.has_visited(mv.to))
            .filter(|mv| !(config.forbid_repeated_direction && self.last_step == Some(mv.step)))
            .map(|mv| mv.to)
            .collect();
        self.targets = targets;
    }
}
