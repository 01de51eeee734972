//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The four seats, in fixed turn rotation: red, green, yellow, blue.
//!
//! ## ColorMap
//!
//! Per-color storage backed by a fixed array, indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::token::{Token, TokenId, TOKENS_PER_PLAYER};
use crate::board::START_OFFSETS;

/// Player color. Declaration order is the turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn rotation.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// The color that moves first in a fresh game.
    pub const FIRST: Color = Color::Red;

    /// Position in the rotation (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next color in rotation.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// assert_eq!(Color::Red.next(), Color::Green);
    /// assert_eq!(Color::Blue.next(), Color::Red);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Path index this color enters the outer track on.
    #[must_use]
    pub const fn start_offset(self) -> usize {
        START_OFFSETS[self.index()]
    }

    /// Lowercase name, as used in token ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    /// Parse a lowercase color name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut captures: ColorMap<u32> = ColorMap::new(|_| 0);
/// captures[Color::Yellow] += 1;
/// assert_eq!(captures[Color::Yellow], 1);
/// assert_eq!(captures[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in rotation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in rotation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// A seat at the board and its four tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    tokens: [Token; TOKENS_PER_PLAYER],
}

impl Player {
    /// A player with every token in base.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            tokens: std::array::from_fn(|slot| Token::in_base(TokenId::new(color, slot as u8))),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens
    }

    /// Get a token by id. The id must belong to this player.
    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        debug_assert_eq!(id.color(), self.color);
        &self.tokens[id.slot() as usize]
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> &mut Token {
        debug_assert_eq!(id.color(), self.color);
        &mut self.tokens[id.slot() as usize]
    }

    /// True iff all four tokens are Home.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.tokens.iter().all(Token::is_home)
    }

    /// Number of tokens that reached Home.
    #[must_use]
    pub fn home_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_home()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation() {
        assert_eq!(Color::Red.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Blue);
        assert_eq!(Color::Blue.next(), Color::Red);
    }

    #[test]
    fn test_start_offsets() {
        let offsets: Vec<_> = Color::ALL.iter().map(|c| c.start_offset()).collect();
        assert_eq!(offsets, vec![0, 13, 26, 39]);
    }

    #[test]
    fn test_color_names() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.as_str()), Some(color));
        }
        assert_eq!(Color::from_name("purple"), None);
        assert_eq!(format!("{}", Color::Yellow), "yellow");
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Green);
    }

    #[test]
    fn test_color_map_iter() {
        let map: ColorMap<usize> = ColorMap::new(|c| c.index() * 10);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (Color::Red, &0));
        assert_eq!(pairs[3], (Color::Blue, &30));
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<i32> = ColorMap::default();

        map[Color::Green] = 10;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        assert_eq!(map[Color::Red], 1);
        assert_eq!(map[Color::Green], 11);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(Color::Blue);

        assert_eq!(player.color(), Color::Blue);
        assert!(player.tokens().iter().all(|t| t.is_in_base()));
        assert!(!player.has_finished());
        assert_eq!(player.home_count(), 0);
        assert_eq!(player.tokens()[2].id(), TokenId::new(Color::Blue, 2));
    }
}
