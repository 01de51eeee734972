//! Shared helpers: drive an instant-delay engine with scripted dice.

#![allow(dead_code)]

use ludo_engine::core::{Color, LoadedDice, RulesConfig, TokenId};
use ludo_engine::engine::{GameEngine, GameEvent};
use ludo_engine::rules::ClassicRules;

pub type TestEngine = GameEngine<ClassicRules, LoadedDice>;

pub fn engine() -> TestEngine {
    engine_with(RulesConfig::default().instant())
}

pub fn engine_with(config: RulesConfig) -> TestEngine {
    GameEngine::with_dice(config, LoadedDice::new([]))
}

pub fn token(color: Color, slot: u8) -> TokenId {
    TokenId::new(color, slot)
}

/// Roll `value` for the current player and let the dice settle.
///
/// A roll with no legal move also runs its auto-pass.
pub fn roll(engine: &mut TestEngine, value: u8) -> Vec<GameEvent> {
    engine.dice_mut().push(value);
    let mut events = engine.roll();
    events.extend(engine.settle());
    events
}

/// Roll `value` and move `token` with it.
pub fn play(engine: &mut TestEngine, value: u8, token: TokenId) -> Vec<GameEvent> {
    let mut events = roll(engine, value);
    events.extend(engine.move_token(token));
    events
}

/// Burn turns with 1s until it is `color`'s turn.
///
/// Only valid while the skipped colors have nothing that can move a 1.
pub fn skip_to(engine: &mut TestEngine, color: Color) {
    while engine.state().current_turn() != color {
        let events = roll(engine, 1);
        assert!(
            events.iter().any(|e| matches!(e, GameEvent::TurnPassed { auto: true, .. })),
            "skipped turn had a legal move: {events:?}"
        );
    }
}

/// Release `token` and walk it to `position` using 6s, ending with one
/// remainder roll. Returns the events of the final move.
pub fn walk_to(engine: &mut TestEngine, token: TokenId, position: u8) -> Vec<GameEvent> {
    skip_to(engine, token.color());
    let mut events = play(engine, 6, token);
    let mut at = 0;
    while position - at >= 6 {
        events = play(engine, 6, token);
        at += 6;
    }
    if position > at {
        events = play(engine, position - at, token);
    }
    events
}

/// Bring every token of `color` home. Returns the events of the last move.
pub fn bring_home(engine: &mut TestEngine, color: Color) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for slot in 0..4 {
        events = walk_to(engine, token(color, slot), 56);
    }
    events
}
