//! Why a move was refused.
//!
//! Refusals are ordinary: the UI offers tokens that may not move, and the
//! engine's command surface turns these into silent no-ops. The typed
//! reason exists for logging and for callers that ask for it.

use crate::core::{Color, TokenId};

/// A move that the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("the game is over")]
    GameOver,

    #[error("no dice value to move with")]
    NoDiceValue,

    #[error("{token} cannot move on {current}'s turn")]
    NotYourTurn { token: TokenId, current: Color },

    #[error("{token} needs a {needed} to leave base, rolled {rolled}")]
    NeedsReleaseRoll { token: TokenId, needed: u8, rolled: u8 },

    #[error("{token} at {position} would overshoot home with {roll}")]
    Overshoot { token: TokenId, position: u8, roll: u8 },

    #[error("{0} is already home")]
    AlreadyHome(TokenId),
}
