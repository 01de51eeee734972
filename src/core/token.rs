//! Tokens and their linear position encoding.
//!
//! ## Position Encoding
//!
//! A token's position is relative to its own color's entry cell:
//!
//! | Position      | Meaning                               |
//! |---------------|---------------------------------------|
//! | `-1`          | In base                               |
//! | `0..=50`      | Main path (shared with other colors)  |
//! | `51..=55`     | Home stretch (private)                |
//! | `56`          | Home (terminal)                       |
//!
//! Status and position are kept consistent by construction: the only way to
//! change a token is through [`Token::place`] and [`Token::send_to_base`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::Color;

/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Position sentinel for a token in base.
pub const BASE_POSITION: i8 = -1;

/// Last relative position on the shared main path.
pub const MAIN_PATH_END: u8 = 50;

/// Terminal position: the token is Home.
pub const HOME_POSITION: u8 = 56;

/// Stable token identifier: owning color plus slot (0..4).
///
/// Displays, parses and serializes as `"<color>-<slot>"`, e.g. `red-0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId {
    color: Color,
    slot: u8,
}

impl TokenId {
    /// Create a token id.
    ///
    /// Panics if `slot` is not below [`TOKENS_PER_PLAYER`].
    #[must_use]
    pub const fn new(color: Color, slot: u8) -> Self {
        assert!((slot as usize) < TOKENS_PER_PLAYER, "token slot out of range");
        Self { color, slot }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn slot(self) -> u8 {
        self.slot
    }

    /// All token ids of one color.
    pub fn all_of(color: Color) -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER as u8).map(move |slot| TokenId::new(color, slot))
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color, self.slot)
    }
}

/// Error parsing a `"<color>-<slot>"` token id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTokenIdError {
    #[error("token id `{0}` is not of the form <color>-<slot>")]
    Malformed(String),

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    #[error("token slot `{0}` is out of range")]
    BadSlot(String),
}

impl FromStr for TokenId {
    type Err = ParseTokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, slot) = s
            .split_once('-')
            .ok_or_else(|| ParseTokenIdError::Malformed(s.to_string()))?;
        let color =
            Color::from_name(color).ok_or_else(|| ParseTokenIdError::UnknownColor(color.to_string()))?;
        let slot: u8 = slot
            .parse()
            .map_err(|_| ParseTokenIdError::BadSlot(slot.to_string()))?;
        if slot as usize >= TOKENS_PER_PLAYER {
            return Err(ParseTokenIdError::BadSlot(slot.to_string()));
        }
        Ok(TokenId::new(color, slot))
    }
}

impl TryFrom<String> for TokenId {
    type Error = ParseTokenIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenId> for String {
    fn from(id: TokenId) -> Self {
        id.to_string()
    }
}

/// Where a token is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
    InBase,
    Active,
    Home,
}

/// A single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    position: i8,
    status: TokenStatus,
}

impl Token {
    /// A token sitting in base.
    #[must_use]
    pub const fn in_base(id: TokenId) -> Self {
        Self {
            id,
            position: BASE_POSITION,
            status: TokenStatus::InBase,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color
    }

    /// Raw relative position (`-1` in base).
    #[must_use]
    pub const fn position(&self) -> i8 {
        self.position
    }

    #[must_use]
    pub const fn status(&self) -> TokenStatus {
        self.status
    }

    #[must_use]
    pub fn is_in_base(&self) -> bool {
        self.status == TokenStatus::InBase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == TokenStatus::Active
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.status == TokenStatus::Home
    }

    /// Main-path position, if the token is Active on the shared track.
    #[must_use]
    pub fn main_path_position(&self) -> Option<u8> {
        match self.status {
            TokenStatus::Active if (self.position as u8) <= MAIN_PATH_END => Some(self.position as u8),
            _ => None,
        }
    }

    /// Put the token on the board at `position`; it becomes Home at the
    /// terminal position and Active otherwise.
    pub fn place(&mut self, position: u8) {
        debug_assert!(position <= HOME_POSITION, "position {} past home", position);
        let position = position.min(HOME_POSITION);
        self.position = position as i8;
        self.status = if position == HOME_POSITION {
            TokenStatus::Home
        } else {
            TokenStatus::Active
        };
    }

    /// Return the token to base.
    pub fn send_to_base(&mut self) {
        self.position = BASE_POSITION;
        self.status = TokenStatus::InBase;
    }

    /// Status/position agreement.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.status {
            TokenStatus::InBase => self.position == BASE_POSITION,
            TokenStatus::Home => self.position == HOME_POSITION as i8,
            TokenStatus::Active => (0..HOME_POSITION as i8).contains(&self.position),
        }
    }
}
