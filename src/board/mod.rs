//! Board geometry: static tables and the coordinate resolver.
//!
//! The resolver is presentation data for the browser board. The one piece
//! the rules depend on is the start-offset table, which both sides read from
//! [`tables::START_OFFSETS`].

pub mod tables;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Token, TokenStatus, MAIN_PATH_END};

pub use tables::{
    is_safe_cell, is_star_cell, is_start_cell, BASE_COORDINATES, CENTER, GRID_SIZE,
    HOME_STRETCH_COORDINATES, HOME_STRETCH_LEN, PATH_COORDINATES, PATH_LEN, SAFE_CELLS,
    START_OFFSETS, STAR_OFFSET,
};

/// A cell on the 15x15 grid, zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Absolute outer-path index for a color's relative main-path position.
///
/// Only meaningful for `0..=MAIN_PATH_END`; home-stretch positions have no
/// shared cell.
#[must_use]
pub fn absolute_index(color: Color, position: u8) -> usize {
    (color.start_offset() + position as usize) % PATH_LEN
}

/// Map a token's raw state to the grid cell it is drawn on.
///
/// `slot` is the token's index within its color (0..4) and only matters
/// while the token sits in base.
#[must_use]
pub fn resolve_position(color: Color, position: i8, status: TokenStatus, slot: u8) -> Cell {
    debug_assert!(slot < 4, "token slot out of range: {}", slot);

    match status {
        TokenStatus::InBase => BASE_COORDINATES[color.index()][slot as usize % 4],
        TokenStatus::Home => CENTER,
        TokenStatus::Active => {
            let position = position.max(0) as u8;
            if position <= MAIN_PATH_END {
                PATH_COORDINATES[absolute_index(color, position)]
            } else {
                let step = (position - MAIN_PATH_END - 1) as usize;
                HOME_STRETCH_COORDINATES[color.index()][step.min(HOME_STRETCH_LEN - 1)]
            }
        }
    }
}

/// Resolve a token directly.
#[must_use]
pub fn resolve_token(token: &Token) -> Cell {
    resolve_position(token.color(), token.position(), token.status(), token.id().slot())
}
