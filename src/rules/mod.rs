//! Ludo rules.
//!
//! `RulesEngine` defines:
//! - Token legality for a roll
//! - How a move modifies state (captures, win, turn hand-off)
//! - The terminal condition
//!
//! The engine calls into `RulesEngine` and never decides legality itself.

pub mod engine;
pub mod error;

pub use engine::{ClassicRules, MoveOutcome, MovePlan, Occupancy, RulesEngine};
pub use error::MoveRejection;
