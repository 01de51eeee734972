//! Pure state transitions.
//!
//! Each function reads a snapshot and returns a new one plus the events it
//! produced; none of them touch the input. `None`/`Err` means the command
//! does not apply and the caller keeps the old snapshot.

use super::events::GameEvent;
use crate::core::{GameState, GameStatus, TokenId};
use crate::rules::{MoveRejection, RulesEngine};

/// A new snapshot and the events that produced it.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    fn new(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }
}

/// Whether a roll may start: not rolling, no unconsumed value, game live.
#[must_use]
pub fn can_roll(state: &GameState) -> bool {
    !state.is_rolling() && state.dice_value().is_none() && !state.is_finished()
}

/// Start rolling. The value arrives later via [`complete_roll`].
#[must_use]
pub fn begin_roll(state: &GameState) -> Option<Transition> {
    if !can_roll(state) {
        return None;
    }

    let mut next = Transition::new(state.clone());
    next.state.set_rolling(true);
    if next.state.status() == GameStatus::Waiting {
        next.state.set_status(GameStatus::Playing);
    }
    next.state.bump_version();
    next.events.push(GameEvent::RollStarted {
        color: state.current_turn(),
    });
    Some(next)
}

/// Settle an in-flight roll on `value`.
///
/// The caller has already checked the roll is still live.
#[must_use]
pub fn complete_roll<R: RulesEngine>(state: &GameState, rules: &R, value: u8) -> Transition {
    debug_assert!(state.is_rolling());
    let color = state.current_turn();

    let mut next = Transition::new(state.clone());
    next.state.set_rolling(false);
    next.state.set_dice_value(Some(value));
    next.state.bump_version();
    next.events.push(GameEvent::Rolled {
        color,
        value,
        has_moves: rules.has_legal_move(state, color, value),
    });
    next
}

/// Move a token by the pending roll.
pub fn move_token<R: RulesEngine>(
    state: &GameState,
    rules: &R,
    token: TokenId,
) -> Result<Transition, MoveRejection> {
    let plan = rules.plan_move(state, token)?;
    let color = token.color();

    let mut next = Transition::new(state.clone());
    let outcome = rules.apply_move(&mut next.state, &plan);
    next.state.bump_version();

    next.events.push(GameEvent::TokenMoved {
        token,
        from: outcome.record.from,
        to: outcome.record.to,
    });
    next.events.extend(
        outcome
            .record
            .captured
            .iter()
            .map(|&captured| GameEvent::TokenCaptured { token: captured, by: token }),
    );
    if outcome.won {
        next.events.push(GameEvent::GameWon { color });
    } else if outcome.bonus {
        next.events.push(GameEvent::BonusTurn { color });
    } else {
        next.events.push(GameEvent::TurnPassed {
            from: color,
            to: next.state.current_turn(),
            auto: false,
        });
    }
    Ok(next)
}

/// Hand the turn on, dropping any pending or in-flight roll.
#[must_use]
pub fn pass_turn(state: &GameState, auto: bool) -> Option<Transition> {
    if state.is_finished() {
        return None;
    }

    let mut next = Transition::new(state.clone());
    next.state.set_dice_value(None);
    next.state.set_rolling(false);
    next.state.advance_turn();
    next.state.bump_version();
    next.events.push(GameEvent::TurnPassed {
        from: state.current_turn(),
        to: next.state.current_turn(),
        auto,
    });
    Some(next)
}

/// Replace the game with a fresh one.
#[must_use]
pub fn reset(state: &GameState) -> Transition {
    let mut next = Transition::new(GameState::succeeding(state));
    next.events.push(GameEvent::GameReset);
    next
}
