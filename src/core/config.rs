//! Rules configuration.
//!
//! Hosts configure the engine at startup with a [`RulesConfig`]. The
//! defaults are the classic rules: a 6 releases a token and earns a bonus
//! roll, overshooting home is rejected, and both animation delays are one
//! second.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What to do when a roll would carry a token past Home.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvershootPolicy {
    /// The move is illegal.
    #[default]
    Reject,
    /// The token stops on Home.
    Clamp,
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Roll needed to bring a token out of base.
    pub release_roll: u8,

    /// Roll that grants the mover another turn.
    pub bonus_roll: u8,

    /// Simulated dice animation before the value is known.
    #[serde(with = "millis")]
    pub roll_delay: Duration,

    /// How long a "no moves" roll stays visible before the turn passes.
    #[serde(with = "millis")]
    pub auto_pass_delay: Duration,

    /// Overshoot handling for moves past Home.
    pub overshoot: OvershootPolicy,

    /// Seed for the dice RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            release_roll: 6,
            bonus_roll: 6,
            roll_delay: Duration::from_millis(1000),
            auto_pass_delay: Duration::from_millis(1000),
            overshoot: OvershootPolicy::Reject,
            seed: None,
        }
    }
}

impl RulesConfig {
    /// Classic rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roll that releases a token from base.
    #[must_use]
    pub fn with_release_roll(mut self, roll: u8) -> Self {
        assert!((1..=6).contains(&roll), "Release roll must be 1-6");
        self.release_roll = roll;
        self
    }

    /// Set the roll that grants a bonus turn.
    #[must_use]
    pub fn with_bonus_roll(mut self, roll: u8) -> Self {
        assert!((1..=6).contains(&roll), "Bonus roll must be 1-6");
        self.bonus_roll = roll;
        self
    }

    /// Set the dice animation delay.
    #[must_use]
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Set the delay before a no-move roll passes the turn.
    #[must_use]
    pub fn with_auto_pass_delay(mut self, delay: Duration) -> Self {
        self.auto_pass_delay = delay;
        self
    }

    /// Set the overshoot policy.
    #[must_use]
    pub fn with_overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Both delays zero: every roll resolves on the next `advance`.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_roll_delay(Duration::ZERO)
            .with_auto_pass_delay(Duration::ZERO)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
