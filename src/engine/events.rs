//! Events emitted by accepted commands and fired timers.

use serde::{Deserialize, Serialize};

use crate::core::{Color, TokenId};

/// Something that happened to the game.
///
/// A rejected command or a stale timer emits nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The dice started rolling.
    RollStarted { color: Color },

    /// The dice settled.
    Rolled { color: Color, value: u8, has_moves: bool },

    /// A token moved.
    TokenMoved { token: TokenId, from: i8, to: i8 },

    /// A token was sent back to base.
    TokenCaptured { token: TokenId, by: TokenId },

    /// The mover keeps the turn (rolled the bonus value or captured).
    BonusTurn { color: Color },

    /// The turn changed hands without a move (manual or automatic pass),
    /// or after a move that earned no bonus.
    TurnPassed { from: Color, to: Color, auto: bool },

    /// Someone brought all four tokens home.
    GameWon { color: Color },

    /// A new game replaced the old one.
    GameReset,
}
