//! Invariants over random command sequences.

use std::time::Duration;

use proptest::prelude::*;

use ludo_engine::core::{
    Color, Command, GameState, GameStatus, RulesConfig, TokenId, TokenStatus, HOME_POSITION,
};
use ludo_engine::engine::GameEngine;

#[derive(Clone, Debug)]
enum Step {
    Command(Command),
    Advance(u64),
}

fn arb_token() -> impl Strategy<Value = TokenId> {
    (0..4usize, 0..4u8).prop_map(|(color, slot)| TokenId::new(Color::ALL[color], slot))
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => Just(Step::Command(Command::Roll)),
        6 => arb_token().prop_map(|t| Step::Command(Command::Move(t))),
        1 => Just(Step::Command(Command::Pass)),
        1 => (0..3000u64).prop_map(Step::Advance),
    ]
}

fn check_invariants(state: &GameState) {
    assert_eq!(state.validate(), Ok(()));
    for token in state.tokens() {
        match token.status() {
            TokenStatus::InBase => assert_eq!(token.position(), -1),
            TokenStatus::Home => assert_eq!(token.position(), HOME_POSITION as i8),
            TokenStatus::Active => assert!((0..HOME_POSITION as i8).contains(&token.position())),
        }
    }
    assert!(!(state.is_rolling() && state.dice_value().is_some()));
    assert_eq!(state.winner().is_some(), state.status() == GameStatus::Finished);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), steps in prop::collection::vec(arb_step(), 1..400)) {
        let mut engine = GameEngine::new(RulesConfig::default().with_seed(seed));
        let mut version = engine.state().version();

        for step in steps {
            let before = engine.state().clone();
            let events = match step {
                Step::Command(command) => engine.dispatch(command),
                Step::Advance(ms) => engine.advance(Duration::from_millis(ms)),
            };

            // Nothing reported, nothing changed
            if events.is_empty() {
                prop_assert_eq!(engine.state(), &before);
            }
            prop_assert!(engine.state().version() >= version);
            version = engine.state().version();

            check_invariants(engine.state());
        }
    }

    #[test]
    fn prop_finished_game_ignores_all_but_reset(
        seed in any::<u64>(),
        commands in prop::collection::vec(prop_oneof![
            Just(Command::Roll),
            Just(Command::Pass),
            arb_token().prop_map(Command::Move),
        ], 1..50),
    ) {
        // Play a fast game to completion by always taking the first legal move.
        let mut engine = GameEngine::new(RulesConfig::default().instant().with_seed(seed));
        for _ in 0..20_000 {
            if engine.state().is_finished() {
                break;
            }
            engine.roll();
            engine.settle();
            if let Some(&token) = engine.legal_moves().first() {
                engine.move_token(token);
            }
        }
        prop_assume!(engine.state().is_finished());

        let finished = engine.state().clone();
        for command in commands {
            prop_assert!(engine.dispatch(command).is_empty());
            engine.settle();
            prop_assert_eq!(engine.state(), &finished);
        }
    }

    #[test]
    fn prop_snapshot_codec(seed in any::<u64>(), rolls in 1..200usize) {
        let mut engine = GameEngine::new(RulesConfig::default().instant().with_seed(seed));
        for _ in 0..rolls {
            engine.roll();
            engine.settle();
            if let Some(&token) = engine.legal_moves().last() {
                engine.move_token(token);
            }
        }
        let bytes = engine.state().to_bytes().unwrap();
        prop_assert_eq!(&GameState::from_bytes(&bytes).unwrap(), engine.state());
    }
}
