//! Distances to the goal board.
//!
//! Tiles are stored in row-major order with the blank encoded as `dimension * dimension`
//! (see [`blank_tile`]). In this encoding the goal board holds tile `index + 1` in the cell
//! with given `index`, the blank included.

/// Internal label of the blank on the board with given `dimension`.
#[inline(always)] pub fn blank_tile(dimension: usize) -> u32 { (dimension * dimension) as u32 }

/// Returns the tile that occupies the cell with given row-major `index` in the goal board.
#[inline(always)] pub fn goal_tile_at(index: usize) -> u32 { index as u32 + 1 }

/// Returns the row of the goal cell of (non-blank) `tile`.
#[inline(always)] pub fn goal_row(tile: u32, dimension: usize) -> usize { (tile as usize - 1) / dimension }

/// Returns the column of the goal cell of (non-blank) `tile`.
#[inline(always)] pub fn goal_col(tile: u32, dimension: usize) -> usize { (tile as usize - 1) % dimension }

/// Heuristic values and the blank position computed for a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distances {
    /// Number of tiles (excluding blank) that are not in their goal cells.
    pub hamming: u32,
    /// Sum of Manhattan distances between tiles (excluding blank) and their goal cells.
    pub manhattan: u32,
    /// Row-major index of the blank cell.
    pub blank: usize
}

/// Computes both distances and locates the blank in a single pass over `tiles`,
/// which are given in the internal encoding.
pub fn calc_distances(tiles: &[u32], dimension: usize) -> Distances {
    let blank_tile = blank_tile(dimension);
    let mut result = Distances { hamming: 0, manhattan: 0, blank: 0 };
    for (index, &tile) in tiles.iter().enumerate() {
        if tile == blank_tile {
            result.blank = index;
        } else if tile != goal_tile_at(index) {
            let (row, col) = (index / dimension, index % dimension);
            result.hamming += 1;
            result.manhattan += (goal_row(tile, dimension).abs_diff(row) + goal_col(tile, dimension).abs_diff(col)) as u32;
        }
    }
    result
}
