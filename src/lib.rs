//! Fanorona rules engine
//!
//! Fanorona is played on the 45 intersections of a 5x9 grid. Pieces step
//! one point along the board lines and capture by approach or by
//! withdrawal:
//! - Approach: the opponent line directly beyond the destination is removed
//! - Withdrawal: the opponent line directly behind the origin is removed
//! - Only one of the two lines is taken per move; the mover chooses when both exist
//! - A capturing piece may keep capturing in the same turn (a chain), never
//!   returning to a point it already visited
//! - A side with no pieces left loses
//!
//! # Architecture
//!
//! - [`board`]: Grid, positions, occupancy
//! - [`rules`]: Intersection strength, capture resolution, move validation
//! - [`game`]: Turn and chain state machine
//! - [`config`]: Optional rule variants
//! - [`ui`]: Native GUI built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use fanorona::{Game, MoveOutcome, Pos};
//!
//! let mut game = Game::new();
//!
//! // White opens into the centre, capturing two Black pieces by approach
//! match game.attempt_move(Pos::new(3, 4), Pos::new(2, 4)) {
//!     Ok(MoveOutcome::Applied(report)) => assert_eq!(report.captured().len(), 2),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! // Decline any further captures and hand the turn to Black
//! if game.chain().is_some() {
//!     game.stop_chain().unwrap();
//! }
//! assert_eq!(game.piece_counts(), (22, 20));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Cell, Player, Pos, COLS, ROWS};
pub use config::GameConfig;
pub use game::{Capture, Chain, Game, MoveOutcome, Phase, PlayedMove, StepReport};
pub use rules::{CaptureDirection, CaptureOutcome, LegalMove, RejectionKind};
