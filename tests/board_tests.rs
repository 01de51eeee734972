//! Board geometry seen from the public API.

mod common;

use std::collections::HashSet;

use common::{engine, play, token, walk_to};
use ludo_engine::board::{
    absolute_index, is_safe_cell, resolve_position, resolve_token, Cell, BASE_COORDINATES,
    CENTER, GRID_SIZE, HOME_STRETCH_COORDINATES, PATH_COORDINATES, SAFE_CELLS,
};
use ludo_engine::core::{Color, TokenStatus};

#[test]
fn test_start_offsets_match_colors() {
    assert_eq!(Color::Red.start_offset(), 0);
    assert_eq!(Color::Green.start_offset(), 13);
    assert_eq!(Color::Yellow.start_offset(), 26);
    assert_eq!(Color::Blue.start_offset(), 39);
}

#[test]
fn test_safe_cells() {
    assert_eq!(SAFE_CELLS, [0, 8, 13, 21, 26, 34, 39, 47]);
    for color in Color::ALL {
        assert!(is_safe_cell(absolute_index(color, 0)));
        assert!(is_safe_cell(absolute_index(color, 8)));
        assert!(!is_safe_cell(absolute_index(color, 1)));
    }
}

#[test]
fn test_every_cell_inside_grid() {
    let all = PATH_COORDINATES
        .iter()
        .chain(HOME_STRETCH_COORDINATES.iter().flatten())
        .chain(BASE_COORDINATES.iter().flatten());
    for cell in all {
        assert!(cell.row < GRID_SIZE && cell.col < GRID_SIZE, "{cell} off the grid");
    }
}

#[test]
fn test_no_cell_shared_between_regions() {
    let mut seen: HashSet<Cell> = HashSet::new();
    let all = PATH_COORDINATES
        .iter()
        .chain(HOME_STRETCH_COORDINATES.iter().flatten())
        .chain(BASE_COORDINATES.iter().flatten())
        .chain(std::iter::once(&CENTER));
    for &cell in all {
        assert!(seen.insert(cell), "{cell} drawn twice");
    }
}

#[test]
fn test_token_resolves_along_its_route() {
    let mut engine = engine();
    let red0 = token(Color::Red, 0);

    assert_eq!(resolve_token(engine.state().token(red0)), BASE_COORDINATES[0][0]);

    play(&mut engine, 6, red0);
    assert_eq!(resolve_token(engine.state().token(red0)), PATH_COORDINATES[0]);

    walk_to(&mut engine, token(Color::Red, 1), 53);
    assert_eq!(
        resolve_token(engine.state().token(token(Color::Red, 1))),
        HOME_STRETCH_COORDINATES[0][2]
    );
}

#[test]
fn test_home_status_wins_over_position() {
    for color in Color::ALL {
        assert_eq!(resolve_position(color, 56, TokenStatus::Home, 0), CENTER);
    }
}

#[test]
fn test_same_relative_position_differs_by_color() {
    let cells: HashSet<Cell> = Color::ALL
        .iter()
        .map(|&color| resolve_position(color, 10, TokenStatus::Active, 0))
        .collect();
    assert_eq!(cells.len(), 4);
}
