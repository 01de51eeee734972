//! Core types: colors, players, tokens, state, commands, dice, configuration.
//!
//! Everything here is plain data. The rules that move it around live in
//! `rules` and the command loop in `engine`.

pub mod player;
pub mod token;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Color, ColorMap, Player};
pub use token::{
    ParseTokenIdError, Token, TokenId, TokenStatus, BASE_POSITION, HOME_POSITION, MAIN_PATH_END,
    TOKENS_PER_PLAYER,
};
pub use rng::{DiceSource, GameRng, GameRngState, LoadedDice, DIE_FACES};
pub use config::{OvershootPolicy, RulesConfig};
pub use action::{Captures, Command, MoveRecord};
pub use state::{GameState, GameStatus, SnapshotError};
