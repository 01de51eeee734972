//! Static board geometry for the 15x15 grid.
//!
//! The outer path is indexed `0..52` clockwise starting at red's entry cell.
//! Each color enters the path at its entry in [`START_OFFSETS`] and, after
//! 51 steps, turns into its own 6-cell home stretch.

use super::Cell;

/// Grid side length.
pub const GRID_SIZE: u8 = 15;

/// Number of cells in the shared outer path.
pub const PATH_LEN: usize = 52;

/// Number of cells in each color's home stretch (the last one is Home).
pub const HOME_STRETCH_LEN: usize = 6;

/// Steps from a color's start cell to its star cell.
pub const STAR_OFFSET: usize = 8;

/// Path index each color enters on, in rotation order (red, green, yellow, blue).
///
/// This is the only offset table in the crate. Movement, capture detection
/// and coordinate resolution all read it through `Color::start_offset`.
pub const START_OFFSETS: [usize; 4] = [0, 13, 26, 39];

/// Safe cells: the four start cells and the four star cells.
pub const SAFE_CELLS: [usize; 8] = [
    START_OFFSETS[0],
    START_OFFSETS[0] + STAR_OFFSET,
    START_OFFSETS[1],
    START_OFFSETS[1] + STAR_OFFSET,
    START_OFFSETS[2],
    START_OFFSETS[2] + STAR_OFFSET,
    START_OFFSETS[3],
    START_OFFSETS[3] + STAR_OFFSET,
];

/// Where Home tokens are drawn.
pub const CENTER: Cell = Cell::new(7, 7);

const fn c(row: u8, col: u8) -> Cell {
    Cell::new(row, col)
}

/// Outer path coordinates, clockwise from red's entry.
pub const PATH_COORDINATES: [Cell; PATH_LEN] = [
    // red arm, heading right then up
    c(6, 1), c(6, 2), c(6, 3), c(6, 4), c(6, 5),
    c(5, 6), c(4, 6), c(3, 6), c(2, 6), c(1, 6), c(0, 6),
    c(0, 7), c(0, 8),
    // green arm
    c(1, 8), c(2, 8), c(3, 8), c(4, 8), c(5, 8),
    c(6, 9), c(6, 10), c(6, 11), c(6, 12), c(6, 13), c(6, 14),
    c(7, 14), c(8, 14),
    // yellow arm
    c(8, 13), c(8, 12), c(8, 11), c(8, 10), c(8, 9),
    c(9, 8), c(10, 8), c(11, 8), c(12, 8), c(13, 8), c(14, 8),
    c(14, 7), c(14, 6),
    // blue arm
    c(13, 6), c(12, 6), c(11, 6), c(10, 6), c(9, 6),
    c(8, 5), c(8, 4), c(8, 3), c(8, 2), c(8, 1), c(8, 0),
    c(7, 0), c(6, 0),
];

/// Home stretch coordinates per color, outermost first, in rotation order.
pub const HOME_STRETCH_COORDINATES: [[Cell; HOME_STRETCH_LEN]; 4] = [
    // red
    [c(7, 1), c(7, 2), c(7, 3), c(7, 4), c(7, 5), c(7, 6)],
    // green
    [c(1, 7), c(2, 7), c(3, 7), c(4, 7), c(5, 7), c(6, 7)],
    // yellow
    [c(7, 13), c(7, 12), c(7, 11), c(7, 10), c(7, 9), c(7, 8)],
    // blue
    [c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 7), c(8, 7)],
];

/// Base slot coordinates per color, in rotation order.
pub const BASE_COORDINATES: [[Cell; 4]; 4] = [
    // red
    [c(2, 2), c(2, 3), c(3, 2), c(3, 3)],
    // green
    [c(2, 11), c(2, 12), c(3, 11), c(3, 12)],
    // yellow
    [c(11, 11), c(11, 12), c(12, 11), c(12, 12)],
    // blue
    [c(11, 2), c(11, 3), c(12, 2), c(12, 3)],
];

/// Check whether an absolute path index is a safe cell.
#[must_use]
pub fn is_safe_cell(path_index: usize) -> bool {
    SAFE_CELLS.contains(&(path_index % PATH_LEN))
}

/// Check whether an absolute path index is one of the four start cells.
#[must_use]
pub fn is_start_cell(path_index: usize) -> bool {
    START_OFFSETS.contains(&(path_index % PATH_LEN))
}

/// Check whether an absolute path index is one of the four star cells.
#[must_use]
pub fn is_star_cell(path_index: usize) -> bool {
    is_safe_cell(path_index) && !is_start_cell(path_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_cells_are_unique_and_on_grid() {
        for (i, a) in PATH_COORDINATES.iter().enumerate() {
            assert!(a.row < GRID_SIZE && a.col < GRID_SIZE);
            for b in &PATH_COORDINATES[i + 1..] {
                assert_ne!(a, b, "duplicate path cell {:?}", a);
            }
        }
    }

    #[test]
    fn test_path_is_contiguous() {
        for i in 0..PATH_LEN {
            let a = PATH_COORDINATES[i];
            let b = PATH_COORDINATES[(i + 1) % PATH_LEN];
            let dr = (a.row as i16 - b.row as i16).abs();
            let dc = (a.col as i16 - b.col as i16).abs();
            // Straight steps, plus one diagonal step at each inner corner
            assert!(dr <= 1 && dc <= 1, "gap between {} and {}", i, (i + 1) % PATH_LEN);
        }
    }

    #[test]
    fn test_safe_cells() {
        assert_eq!(SAFE_CELLS, [0, 8, 13, 21, 26, 34, 39, 47]);
        assert!(is_safe_cell(0));
        assert!(is_safe_cell(47));
        assert!(is_safe_cell(52 + 13));
        assert!(!is_safe_cell(1));
        assert!(is_start_cell(26));
        assert!(!is_start_cell(34));
        assert!(is_star_cell(34));
        assert!(!is_star_cell(39));
    }

    #[test]
    fn test_home_stretches_end_next_to_center() {
        for stretch in HOME_STRETCH_COORDINATES {
            let last = stretch[HOME_STRETCH_LEN - 1];
            let dr = (last.row as i16 - CENTER.row as i16).abs();
            let dc = (last.col as i16 - CENTER.col as i16).abs();
            assert_eq!(dr + dc, 1);
        }
    }
}
