//! The game engine: one authoritative snapshot plus its timers.
//!
//! Commands arrive through [`GameEngine::dispatch`] (or the named helpers)
//! and are applied synchronously. A command that does not apply is ignored
//! and returns no events. Rolls and auto-passes are deferred: they sit in
//! the [`Scheduler`] until the host advances the clock, and each is
//! checked against the live snapshot before it runs.

use std::time::Duration;

use tracing::{debug, info};

use super::events::GameEvent;
use super::query::{self, TurnPhase};
use super::scheduler::{Scheduler, Timer};
use super::transition::{self, Transition};
use crate::core::{Color, Command, DiceSource, GameRng, GameState, RulesConfig, TokenId};
use crate::rules::{ClassicRules, MoveRejection, RulesEngine};

/// Game engine.
///
/// Generic over the rule set and the dice so tests can script rolls.
#[derive(Clone, Debug)]
pub struct GameEngine<R = ClassicRules, D = GameRng> {
    rules: R,
    dice: D,
    state: GameState,
    scheduler: Scheduler,
}

impl GameEngine {
    /// Classic rules with dice seeded from `config.seed` (or entropy).
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_parts(ClassicRules::new(config), dice)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl<D: DiceSource> GameEngine<ClassicRules, D> {
    /// Classic rules with the given dice.
    #[must_use]
    pub fn with_dice(config: RulesConfig, dice: D) -> Self {
        Self::with_parts(ClassicRules::new(config), dice)
    }
}

impl<R: RulesEngine, D: DiceSource> GameEngine<R, D> {
    #[must_use]
    pub fn with_parts(rules: R, dice: D) -> Self {
        Self {
            rules,
            dice,
            state: GameState::new(),
            scheduler: Scheduler::new(),
        }
    }

    // === Accessors ===

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        self.rules.config()
    }

    /// Mutable access to the dice, e.g. to queue scripted values.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// When the next timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Queued timers, including ones that will turn out stale.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    // === Queries ===

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        query::turn_phase(&self.rules, &self.state)
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<TokenId> {
        query::legal_moves(&self.rules, &self.state)
    }

    #[must_use]
    pub fn can_move(&self, token: TokenId) -> bool {
        query::can_move(&self.rules, &self.state, token)
    }

    #[must_use]
    pub fn can_roll(&self) -> bool {
        query::can_roll(&self.state)
    }

    // === Commands ===

    /// Apply a command. Returns the events it produced; empty if ignored.
    pub fn dispatch(&mut self, command: Command) -> Vec<GameEvent> {
        match command {
            Command::Roll => self.roll(),
            Command::Move(token) => self.move_token(token),
            Command::Pass => self.pass(),
            Command::Reset => self.reset(),
        }
    }

    /// Start a roll. The value is drawn when the roll timer fires.
    pub fn roll(&mut self) -> Vec<GameEvent> {
        let Some(next) = transition::begin_roll(&self.state) else {
            debug!(
                rolling = self.state.is_rolling(),
                dice = ?self.state.dice_value(),
                status = ?self.state.status(),
                "roll ignored"
            );
            return Vec::new();
        };
        let timer = Timer::RollComplete {
            version: next.state.version(),
            turn: next.state.current_turn(),
        };
        self.scheduler.schedule(self.rules.config().roll_delay, timer);
        self.commit(next)
    }

    /// Move a token, reporting why if the move is refused.
    pub fn try_move(&mut self, token: TokenId) -> Result<Vec<GameEvent>, MoveRejection> {
        let next = transition::move_token(&self.state, &self.rules, token)?;
        Ok(self.commit(next))
    }

    /// Move a token. A refused move is logged and ignored.
    pub fn move_token(&mut self, token: TokenId) -> Vec<GameEvent> {
        self.try_move(token).unwrap_or_else(|reason| {
            debug!(%token, %reason, "move rejected");
            Vec::new()
        })
    }

    /// Hand the turn to the next color.
    pub fn pass(&mut self) -> Vec<GameEvent> {
        match transition::pass_turn(&self.state, false) {
            Some(next) => self.commit(next),
            None => {
                debug!("pass ignored, game is over");
                Vec::new()
            }
        }
    }

    /// Start a new game. Timers from the old game become stale.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        info!(version = self.state.version(), "game reset");
        let next = transition::reset(&self.state);
        self.commit(next)
    }

    // === Time ===

    /// Move the clock forward by `elapsed`, firing due timers in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let at = self.scheduler.now() + elapsed;
        self.advance_to(at)
    }

    /// Move the clock to `at`, firing due timers in order.
    pub fn advance_to(&mut self, at: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(timer) = self.scheduler.pop_due(at) {
            events.extend(self.fire(timer));
        }
        self.scheduler.advance_to(at);
        events
    }

    /// Fire every queued timer regardless of due time.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.scheduler.next_deadline() {
            events.extend(self.advance_to(deadline));
        }
        events
    }

    fn fire(&mut self, timer: Timer) -> Vec<GameEvent> {
        if !self.is_live(timer) {
            debug!(
                ?timer,
                version = self.state.version(),
                turn = %self.state.current_turn(),
                "stale timer dropped"
            );
            return Vec::new();
        }

        match timer {
            Timer::RollComplete { turn, .. } => self.complete_roll(turn),
            Timer::AutoPass { .. } => match transition::pass_turn(&self.state, true) {
                Some(next) => self.commit(next),
                None => Vec::new(),
            },
        }
    }

    fn is_live(&self, timer: Timer) -> bool {
        if timer.version() != self.state.version() || timer.turn() != self.state.current_turn() {
            return false;
        }
        match timer {
            Timer::RollComplete { .. } => self.state.is_rolling(),
            Timer::AutoPass { .. } => self.state.dice_value().is_some() && !self.state.is_finished(),
        }
    }

    fn complete_roll(&mut self, turn: Color) -> Vec<GameEvent> {
        let value = self.dice.roll_die();
        let next = transition::complete_roll(&self.state, &self.rules, value);

        if !self.rules.has_legal_move(&next.state, turn, value) {
            debug!(%turn, value, "no legal move, auto-pass scheduled");
            let timer = Timer::AutoPass {
                version: next.state.version(),
                turn,
            };
            self.scheduler.schedule(self.rules.config().auto_pass_delay, timer);
        }
        self.commit(next)
    }

    fn commit(&mut self, next: Transition) -> Vec<GameEvent> {
        self.state = next.state;
        debug_assert!(
            self.state.validate().is_ok(),
            "invalid state after transition: {:?}",
            self.state.validate()
        );
        next.events
    }
}
