//! # ludo-engine
//!
//! Authoritative game state for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: Every command maps one immutable
//!    `GameState` to the next. Rejected commands leave it untouched.
//!
//! 2. **Rules Behind a Trait**: Legality, captures and turn hand-off live in
//!    `RulesEngine`; the engine never decides them itself.
//!
//! 3. **Time Is an Input**: Dice animation and auto-pass delays are timers on
//!    a logical clock. Hosts advance it; stale timers are detected by
//!    snapshot version and turn, then dropped.
//!
//! ## Modules
//!
//! - `core`: Colors, tokens, players, state, commands, dice, configuration
//! - `board`: Path geometry, safe cells, grid coordinates for rendering
//! - `rules`: `RulesEngine` trait and the classic rule set
//! - `engine`: Transitions, timers, queries and the `GameEngine` façade
//! - `runtime`: Tokio actor and handle (feature `runtime`)

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;

#[cfg(feature = "runtime")]
pub mod runtime;

// Re-export commonly used types
pub use crate::core::{
    Color, Command, DiceSource, GameRng, GameState, GameStatus, LoadedDice, MoveRecord,
    OvershootPolicy, RulesConfig, Token, TokenId, TokenStatus,
};

pub use crate::board::{resolve_token, Cell};

pub use crate::rules::{ClassicRules, MoveRejection, RulesEngine};

pub use crate::engine::{GameEngine, GameEvent, TurnPhase};

#[cfg(feature = "runtime")]
pub use crate::runtime::{GameHandle, RuntimeError};
