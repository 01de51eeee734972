//! Commands accepted by the engine and the move history they leave behind.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Color;
use super::token::TokenId;

/// Opponent tokens sent home by one move. A single cell rarely holds more
/// than three, so this stays inline.
pub type Captures = SmallVec<[TokenId; 3]>;

/// A command from the UI.
///
/// ```
/// use ludo_engine::core::{Color, Command, TokenId};
///
/// let cmd = Command::Move(TokenId::new(Color::Red, 0));
/// assert_eq!(cmd.to_string(), "move red-0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "token", rename_all = "snake_case")]
pub enum Command {
    /// Start a dice roll for the current player.
    Roll,
    /// Move one of the current player's tokens by the rolled value.
    Move(TokenId),
    /// Give up the rest of the turn.
    Pass,
    /// Start a new game.
    Reset,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Roll => f.write_str("roll"),
            Command::Move(token) => write!(f, "move {}", token),
            Command::Pass => f.write_str("pass"),
            Command::Reset => f.write_str("reset"),
        }
    }
}

/// One resolved move, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The token that moved.
    pub token: TokenId,

    /// The die value consumed.
    pub roll: u8,

    /// Position before the move (`-1` for a release from base).
    pub from: i8,

    /// Position after the move.
    pub to: i8,

    /// Opponent tokens sent back to base.
    pub captured: Captures,

    /// Turn number the move was made on.
    pub turn: u32,
}

impl MoveRecord {
    /// Color that made the move.
    #[must_use]
    pub fn color(&self) -> Color {
        self.token.color()
    }

    /// Whether this move sent anyone home.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}
