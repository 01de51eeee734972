//! Rules engine trait and the classic rule set.
//!
//! The engine asks a `RulesEngine`:
//! - Where a token would land for a roll (or why it cannot move)
//! - Which tokens a player may move
//! - How a move changes the state: captures, win, turn hand-off
//!
//! `ClassicRules` is the standard game; its knobs come from `RulesConfig`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::info;

use super::error::MoveRejection;
use crate::board::{absolute_index, is_safe_cell};
use crate::core::{
    Captures, Color, GameState, MoveRecord, OvershootPolicy, RulesConfig, Token, TokenId,
    TokenStatus, HOME_POSITION, MAIN_PATH_END,
};

/// A validated move, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan {
    /// The token to move.
    pub token: TokenId,

    /// The die value being consumed.
    pub roll: u8,

    /// Position before the move.
    pub from: i8,

    /// Position after the move.
    pub to: u8,

    /// Opponent tokens the move lands on.
    pub captures: Captures,
}

/// What applying a move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// History entry for the move.
    pub record: MoveRecord,

    /// The mover has all four tokens home.
    pub won: bool,

    /// The mover keeps the turn.
    pub bonus: bool,
}

/// Which tokens occupy each outer-path cell.
///
/// Only Active tokens on the shared main path are indexed; home-stretch
/// tokens are unreachable by opponents.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: FxHashMap<usize, SmallVec<[TokenId; 4]>>,
}

impl Occupancy {
    /// Index every token on the main path.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let mut cells: FxHashMap<usize, SmallVec<[TokenId; 4]>> = FxHashMap::default();
        for token in state.tokens() {
            if let Some(position) = token.main_path_position() {
                cells
                    .entry(absolute_index(token.color(), position))
                    .or_default()
                    .push(token.id());
            }
        }
        Self { cells }
    }

    /// Tokens on an absolute path cell.
    #[must_use]
    pub fn at(&self, path_index: usize) -> &[TokenId] {
        self.cells.get(&path_index).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Tokens of colors other than `color` on a path cell.
    pub fn opponents_at(&self, path_index: usize, color: Color) -> impl Iterator<Item = TokenId> + '_ {
        self.at(path_index)
            .iter()
            .copied()
            .filter(move |id| id.color() != color)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `target_position`: legality for one token in isolation
/// - `plan_move`: full preconditions against a snapshot (turn, dice, status)
/// - `apply_move`: mutate a snapshot the caller owns; must be deterministic
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Where `token` lands with `roll`, ignoring whose turn it is.
    fn target_position(&self, token: &Token, roll: u8) -> Result<u8, MoveRejection>;

    /// Validate moving `token` by the pending roll in `state`.
    fn plan_move(&self, state: &GameState, token: TokenId) -> Result<MovePlan, MoveRejection>;

    /// Apply a plan from [`RulesEngine::plan_move`] on the same snapshot.
    fn apply_move(&self, state: &mut GameState, plan: &MovePlan) -> MoveOutcome;

    /// The winner, if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<Color> {
        state.winner()
    }

    // === Convenience Methods ===

    /// Tokens of `color` that may move with `roll`.
    fn legal_moves(&self, state: &GameState, color: Color, roll: u8) -> Vec<TokenId> {
        state
            .player(color)
            .tokens()
            .iter()
            .filter(|t| self.target_position(t, roll).is_ok())
            .map(Token::id)
            .collect()
    }

    /// Whether `color` has any move with `roll`.
    fn has_legal_move(&self, state: &GameState, color: Color, roll: u8) -> bool {
        state
            .player(color)
            .tokens()
            .iter()
            .any(|t| self.target_position(t, roll).is_ok())
    }
}

/// The standard rule set.
#[derive(Clone, Debug, Default)]
pub struct ClassicRules {
    config: RulesConfig,
}

impl ClassicRules {
    /// Create rules from a configuration.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    fn captures_at(&self, state: &GameState, color: Color, to: u8) -> Captures {
        if to > MAIN_PATH_END {
            return Captures::new();
        }
        let cell = absolute_index(color, to);
        if is_safe_cell(cell) {
            return Captures::new();
        }
        Occupancy::of(state).opponents_at(cell, color).collect()
    }
}

impl RulesEngine for ClassicRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn target_position(&self, token: &Token, roll: u8) -> Result<u8, MoveRejection> {
        match token.status() {
            TokenStatus::Home => Err(MoveRejection::AlreadyHome(token.id())),
            TokenStatus::InBase if roll == self.config.release_roll => Ok(0),
            TokenStatus::InBase => Err(MoveRejection::NeedsReleaseRoll {
                token: token.id(),
                needed: self.config.release_roll,
                rolled: roll,
            }),
            TokenStatus::Active => {
                let position = token.position() as u8;
                let to = position + roll;
                if to <= HOME_POSITION {
                    Ok(to)
                } else {
                    match self.config.overshoot {
                        OvershootPolicy::Clamp => Ok(HOME_POSITION),
                        OvershootPolicy::Reject => Err(MoveRejection::Overshoot {
                            token: token.id(),
                            position,
                            roll,
                        }),
                    }
                }
            }
        }
    }

    fn plan_move(&self, state: &GameState, token: TokenId) -> Result<MovePlan, MoveRejection> {
        if state.is_finished() {
            return Err(MoveRejection::GameOver);
        }
        let roll = state.dice_value().ok_or(MoveRejection::NoDiceValue)?;
        if token.color() != state.current_turn() {
            return Err(MoveRejection::NotYourTurn {
                token,
                current: state.current_turn(),
            });
        }

        let current = state.token(token);
        let to = self.target_position(current, roll)?;

        Ok(MovePlan {
            token,
            roll,
            from: current.position(),
            to,
            captures: self.captures_at(state, token.color(), to),
        })
    }

    fn apply_move(&self, state: &mut GameState, plan: &MovePlan) -> MoveOutcome {
        let color = plan.token.color();

        state.token_mut(plan.token).place(plan.to);
        for &captured in &plan.captures {
            info!(%captured, by = %plan.token, "token captured");
            state.token_mut(captured).send_to_base();
        }

        let record = MoveRecord {
            token: plan.token,
            roll: plan.roll,
            from: plan.from,
            to: plan.to as i8,
            captured: plan.captures.clone(),
            turn: state.turn_number(),
        };
        state.record_move(record.clone());
        state.set_dice_value(None);

        let won = state.player(color).has_finished();
        let bonus = !won && (record.is_capture() || plan.roll == self.config.bonus_roll);

        if won {
            info!(%color, "game won");
            state.declare_winner(color);
        } else if !bonus {
            state.advance_turn();
        }

        MoveOutcome { record, won, bonus }
    }
}
