//! Game state: the single authoritative snapshot.
//!
//! ## GameState
//!
//! - Four players (one per color) and their tokens
//! - Whose turn it is, the pending die value, the rolling flag
//! - Game status and winner
//! - A monotonic `version` bumped by every accepted command
//! - Move history
//!
//! Snapshots are replaced wholesale by the engine; outside the crate they
//! are read-only. History uses `im` so cloning a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::player::{Color, ColorMap, Player};
use super::token::{Token, TokenId};

/// Game-level lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fresh board, nobody has rolled yet.
    #[default]
    Waiting,
    /// At least one roll has happened.
    Playing,
    /// Someone won. Only a reset leaves this state.
    Finished,
}

/// Errors encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot violates invariants: {0}")]
    Invalid(&'static str),
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: ColorMap<Player>,
    current_turn: Color,
    dice_value: Option<u8>,
    is_rolling: bool,
    winner: Option<Color>,
    status: GameStatus,
    /// Bumped by every accepted command, and carried across resets.
    version: u64,
    /// Starts at 1, increments whenever the turn changes hands.
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: every token in base, first color to roll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: ColorMap::new(Player::new),
            current_turn: Color::FIRST,
            dice_value: None,
            is_rolling: false,
            winner: None,
            status: GameStatus::Waiting,
            version: 0,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// A fresh game that replaces `previous`.
    ///
    /// The version continues from `previous` so anything keyed on the old
    /// version is recognisably stale.
    #[must_use]
    pub fn succeeding(previous: &GameState) -> Self {
        Self {
            version: previous.version + 1,
            ..Self::new()
        }
    }

    // === Queries ===

    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        self.players[id.color()].token(id)
    }

    /// Every token on the board, in rotation order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.players.values().flat_map(|p| p.tokens().iter())
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        self.dice_value
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.is_rolling
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Check every structural invariant of the snapshot.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), &'static str> {
        for (color, player) in self.players.iter() {
            if player.color() != color {
                return Err("player stored under the wrong color");
            }
            for (slot, token) in player.tokens().iter().enumerate() {
                if token.id() != TokenId::new(color, slot as u8) {
                    return Err("token stored under the wrong id");
                }
                if !token.is_consistent() {
                    return Err("token status disagrees with its position");
                }
            }
        }
        if let Some(value) = self.dice_value {
            if !(1..=6).contains(&value) {
                return Err("dice value out of range");
            }
            if self.is_rolling {
                return Err("dice value present while rolling");
            }
        }
        match (self.status, self.winner) {
            (GameStatus::Finished, Some(winner)) if self.players[winner].has_finished() => {}
            (GameStatus::Finished, _) => return Err("finished game without a finished winner"),
            (_, Some(_)) => return Err("winner set on an unfinished game"),
            (_, None) => {}
        }
        Ok(())
    }

    // === Snapshot codec ===

    /// Encode the snapshot for the UI boundary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate().map_err(SnapshotError::Invalid)?;
        Ok(state)
    }

    // === Transitions (crate-internal) ===

    pub(crate) fn token_mut(&mut self, id: TokenId) -> &mut Token {
        self.players[id.color()].token_mut(id)
    }

    pub(crate) fn set_dice_value(&mut self, value: Option<u8>) {
        self.dice_value = value;
    }

    pub(crate) fn set_rolling(&mut self, rolling: bool) {
        self.is_rolling = rolling;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Hand the turn to the next color.
    pub(crate) fn advance_turn(&mut self) {
        self.current_turn = self.current_turn.next();
        self.turn_number += 1;
    }

    pub(crate) fn declare_winner(&mut self, color: Color) {
        self.winner = Some(color);
        self.status = GameStatus::Finished;
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    #[cfg(test)]
    pub(crate) fn set_current_turn(&mut self, color: Color) {
        self.current_turn = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.current_turn(), Color::Red);
        assert_eq!(state.dice_value(), None);
        assert!(!state.is_rolling());
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), GameStatus::Waiting);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.tokens().count(), 16);
        assert!(state.tokens().all(Token::is_in_base));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_succeeding_carries_version() {
        let mut state = GameState::new();
        state.bump_version();
        state.bump_version();
        state.advance_turn();

        let fresh = GameState::succeeding(&state);

        assert_eq!(fresh.version(), 3);
        assert_eq!(fresh.current_turn(), Color::Red);
        assert_eq!(fresh.turn_number(), 1);
    }

    #[test]
    fn test_advance_turn() {
        let mut state = GameState::new();
        state.advance_turn();

        assert_eq!(state.current_turn(), Color::Green);
        assert_eq!(state.turn_number(), 2);
    }

    #[test]
    fn test_validate_catches_bad_dice() {
        let mut state = GameState::new();
        state.set_dice_value(Some(7));
        assert!(state.validate().is_err());

        state.set_dice_value(Some(3));
        state.set_rolling(true);
        assert_eq!(state.validate(), Err("dice value present while rolling"));
    }

    #[test]
    fn test_validate_catches_premature_winner() {
        let mut state = GameState::new();
        state.declare_winner(Color::Blue);
        assert_eq!(state.validate(), Err("finished game without a finished winner"));
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new();
        state.record_move(MoveRecord {
            token: TokenId::new(Color::Red, 0),
            roll: 6,
            from: -1,
            to: 0,
            captured: Default::default(),
            turn: 1,
        });

        let cloned = state.clone();
        assert_eq!(cloned.history().len(), 1);
        assert_eq!(cloned, state);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut state = GameState::new();
        state.token_mut(TokenId::new(Color::Green, 1)).place(12);
        state.set_dice_value(Some(4));

        let bytes = state.to_bytes().unwrap();
        let decoded = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, state);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(GameState::from_bytes(&[1, 2, 3]).is_err());
    }
}
