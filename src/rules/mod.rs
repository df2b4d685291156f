//! Game rules for Fanorona
//!
//! This module implements the rule set including:
//! - Intersection strength (which directions a piece may step in)
//! - Capture by approach and by withdrawal
//! - Move validation and enumeration

pub mod capture;
pub mod intersection;
pub mod movegen;
pub mod validate;

// Re-exports for convenient access
pub use capture::{
    approach_run, capture_run, has_capture, resolve_captures, withdrawal_run, CaptureDirection,
    CaptureOutcome,
};
pub use intersection::{classify, neighbours, Step, Strength};
pub use movegen::{capturing_moves, has_any_capture, legal_moves, moves_from};
pub use validate::{validate_move, LegalMove, RejectionKind};
