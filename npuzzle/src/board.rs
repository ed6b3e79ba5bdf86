use crate::error::BoardError;
use crate::heuristic::{blank_tile, calc_distances};
use crate::neighbors::{blank_moves_at, Direction};
use arrayvec::ArrayVec;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// External label of the blank.
pub const BLANK: u32 = 0;

/// Immutable configuration of the N-puzzle.
///
/// Hamming and Manhattan distances to the goal, as well as the blank position,
/// are computed once, during construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    /// Row-major tiles; the blank is stored as `dimension * dimension`.
    tiles: Box<[u32]>,
    /// Row-major index of the blank.
    blank: usize,
    hamming: u32,
    manhattan: u32
}

impl Board {
    /// Constructs the board of given `dimension` from row-major `tiles`, with `0` denoting the blank.
    pub fn new(dimension: usize, tiles: impl IntoIterator<Item=u32>) -> Result<Self, BoardError> {
        if dimension == 0 { return Err(BoardError::EmptyBoard); }
        let cells = dimension.checked_mul(dimension)
            .filter(|cells| *cells <= u32::MAX as usize)
            .ok_or(BoardError::TooLarge { dimension })?;
        let mut tiles: Vec<u32> = tiles.into_iter().collect();
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount { expected: cells, found: tiles.len() });
        }
        let max = (cells - 1) as u32;
        let mut seen = vec![false; cells];
        for tile in tiles.iter_mut() {
            if *tile > max { return Err(BoardError::TileOutOfRange { tile: *tile, max }); }
            if std::mem::replace(&mut seen[*tile as usize], true) {
                return Err(BoardError::DuplicateTile { tile: *tile });
            }
            if *tile == BLANK { *tile = blank_tile(dimension); }
        }
        Ok(Self::from_internal(dimension, tiles.into_boxed_slice()))
    }

    /// Constructs the board from the grid given as a list of rows, with `0` denoting the blank.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if let Some((row, len)) = rows.iter().map(|r| r.as_ref().len()).enumerate().find(|(_, len)| *len != dimension) {
            return Err(BoardError::NotSquare { row, len, dimension });
        }
        Self::new(dimension, rows.iter().flat_map(|r| r.as_ref().iter().copied()))
    }

    /// Constructs the goal board of given `dimension`.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        let cells = dimension.checked_mul(dimension).ok_or(BoardError::TooLarge { dimension })?;
        Self::new(dimension, (1..cells as u32).chain(std::iter::once(BLANK)))
    }

    /// Constructs the board from already validated `tiles` in the internal encoding.
    fn from_internal(dimension: usize, tiles: Box<[u32]>) -> Self {
        let distances = calc_distances(&tiles, dimension);
        Self {
            dimension,
            tiles,
            blank: distances.blank,
            hamming: distances.hamming,
            manhattan: distances.manhattan
        }
    }

    /// Returns the board that differs from `self` by swapping the tiles at `first` and `second` indices.
    fn swapped(&self, first: usize, second: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Self::from_internal(self.dimension, tiles)
    }

    #[inline] fn index(&self, row: usize, col: usize) -> usize { row * self.dimension + col }

    /// Returns the number of rows (and columns) of the board.
    #[inline] pub fn dimension(&self) -> usize { self.dimension }

    /// Returns the number of tiles out of their goal cells.
    #[inline] pub fn hamming(&self) -> u32 { self.hamming }

    /// Returns the sum of Manhattan distances between the tiles and their goal cells.
    #[inline] pub fn manhattan(&self) -> u32 { self.manhattan }

    /// Checks whether the board is the goal board.
    #[inline] pub fn is_goal(&self) -> bool { self.hamming == 0 && self.manhattan == 0 }

    /// Returns the (row, col) of the blank.
    #[inline] pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Returns the label of the tile at (`row`, `col`), [`BLANK`] for the blank.
    pub fn tile_at(&self, row: usize, col: usize) -> u32 {
        self.external(self.tiles[self.index(row, col)])
    }

    #[inline] fn external(&self, tile: u32) -> u32 {
        if tile == blank_tile(self.dimension) { BLANK } else { tile }
    }

    /// Returns tile labels in row-major order, [`BLANK`] for the blank.
    pub fn tiles(&self) -> Tiles<'_> {
        Tiles { tiles: self.tiles.iter(), blank: blank_tile(self.dimension) }
    }

    /// Returns the directions in which the blank can move.
    #[inline] pub fn blank_moves(&self) -> ArrayVec<Direction, 4> {
        let (row, col) = self.blank_position();
        blank_moves_at(row, col, self.dimension)
    }

    /// Returns the board obtained by moving the blank in given `direction`,
    /// or `None` if the blank is at the edge of the board in that direction.
    pub fn moved(&self, direction: Direction) -> Option<Self> {
        if !self.blank_moves().contains(&direction) { return None; }
        Some(self.moved_unchecked(direction))
    }

    fn moved_unchecked(&self, direction: Direction) -> Self {
        let (row, col) = self.blank_position();
        let (target_row, target_col) = direction.target(row, col);
        self.swapped(self.blank, self.index(target_row, target_col))
    }

    /// Returns all boards reachable by a single slide, one per legal move of the blank.
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        self.blank_moves().into_iter().map(|direction| self.moved_unchecked(direction)).collect()
    }

    /// Returns the board with two adjacent non-blank tiles swapped, in the first row if it
    /// does not contain the blank, otherwise in the second row.
    ///
    /// Exactly one of the board and its twin is solvable.
    /// The only board of dimension 1 has no two tiles, so its twin is equal to it.
    pub fn twin(&self) -> Self {
        if self.dimension < 2 { return self.clone(); }
        let row = if self.blank_position().0 != 0 { 0 } else { 1 };
        self.swapped(self.index(row, 0), self.index(row, 1))
    }
}

/// Iterator over tile labels of a [`Board`].
#[derive(Clone)]
pub struct Tiles<'a> {
    tiles: std::slice::Iter<'a, u32>,
    blank: u32
}

impl Iterator for Tiles<'_> {
    type Item = u32;

    #[inline] fn next(&mut self) -> Option<Self::Item> {
        self.tiles.next().map(|t| if *t == self.blank { BLANK } else { *t })
    }

    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.tiles.size_hint() }
}

impl ExactSizeIterator for Tiles<'_> {}

impl FusedIterator for Tiles<'_> {}

/// Prints the dimension in the first line, followed by rows of space-separated tiles (`0` for the blank).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension)?;
        let width = self.tiles.len().saturating_sub(1).to_string().len();
        for (index, tile) in self.tiles().enumerate() {
            if index % self.dimension == 0 { writeln!(f)?; } else { write!(f, " ")?; }
            write!(f, "{:>width$}", tile, width = width)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(h={}, m={}) ", self.hamming, self.manhattan)?;
        f.debug_list().entries(self.tiles()).finish()
    }
}

/// Parses the dimension `N` followed by `N*N` whitespace-separated tiles in row-major order (`0` for the blank).
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn number<T: FromStr>(token: &str) -> Result<T, BoardError> {
            token.parse().map_err(|_| BoardError::InvalidNumber { token: token.to_owned() })
        }
        let mut tokens = s.split_whitespace();
        let dimension: usize = number(tokens.next().ok_or(BoardError::MissingDimension)?)?;
        let tiles = tokens.map(number::<u32>).collect::<Result<Vec<_>, _>>()?;
        Self::new(dimension, tiles)
    }
}
