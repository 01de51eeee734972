//! Read-only questions a UI asks about a snapshot.

use serde::{Deserialize, Serialize};

use super::transition;
use crate::core::{GameState, TokenId};
use crate::rules::RulesEngine;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// The current player may roll.
    WaitingForRoll,
    /// Dice are in flight.
    Rolling,
    /// A value is pending and at least one token can use it.
    RolledWithMoves,
    /// A value is pending with nothing to move; an auto-pass is due.
    RolledNoMoves,
    /// Someone has won.
    GameOver,
}

#[must_use]
pub fn turn_phase<R: RulesEngine>(rules: &R, state: &GameState) -> TurnPhase {
    if state.is_finished() {
        return TurnPhase::GameOver;
    }
    if state.is_rolling() {
        return TurnPhase::Rolling;
    }
    match state.dice_value() {
        None => TurnPhase::WaitingForRoll,
        Some(roll) if rules.has_legal_move(state, state.current_turn(), roll) => {
            TurnPhase::RolledWithMoves
        }
        Some(_) => TurnPhase::RolledNoMoves,
    }
}

/// Tokens the current player may move with the pending roll.
#[must_use]
pub fn legal_moves<R: RulesEngine>(rules: &R, state: &GameState) -> Vec<TokenId> {
    match state.dice_value() {
        Some(roll) if !state.is_finished() => {
            rules.legal_moves(state, state.current_turn(), roll)
        }
        _ => Vec::new(),
    }
}

/// Whether moving `token` would be accepted right now.
#[must_use]
pub fn can_move<R: RulesEngine>(rules: &R, state: &GameState, token: TokenId) -> bool {
    rules.plan_move(state, token).is_ok()
}

/// Whether a roll would be accepted right now.
#[must_use]
pub fn can_roll(state: &GameState) -> bool {
    transition::can_roll(state)
}
