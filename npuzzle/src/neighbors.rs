use arrayvec::ArrayVec;

/// Direction in which the blank moves (the tile it swaps with moves the opposite way).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down
}

impl Direction {
    /// Returns the (row, col) of the cell the blank moves to from (`row`, `col`).
    /// The caller must ensure the move stays on the board.
    #[inline] pub fn target(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Placement of a coordinate (row or column) within `0..dimension`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// `dimension == 1`, the coordinate is both first and last.
    Only,
    First,
    Middle,
    Last
}

impl Placement {
    /// Returns placement of `index` within `0..dimension`.
    pub fn of(index: usize, dimension: usize) -> Self {
        if dimension == 1 { Placement::Only }
        else if index == 0 { Placement::First }
        else if index + 1 == dimension { Placement::Last }
        else { Placement::Middle }
    }

    /// Moves along the row (with the blank in a column of this placement).
    fn horizontal(self) -> &'static [Direction] {
        match self {
            Placement::Only => &[],
            Placement::First => &[Direction::Right],
            Placement::Middle => &[Direction::Left, Direction::Right],
            Placement::Last => &[Direction::Left],
        }
    }

    /// Moves along the column (with the blank in a row of this placement).
    fn vertical(self) -> &'static [Direction] {
        match self {
            Placement::Only => &[],
            Placement::First => &[Direction::Down],
            Placement::Middle => &[Direction::Down, Direction::Up],
            Placement::Last => &[Direction::Up],
        }
    }
}

/// Returns legal moves of the blank that occupies a cell in a row of given `row` placement
/// and a column of given `col` placement.
///
/// Horizontal moves come first (left before right), then vertical ones (down before up).
pub fn blank_moves(row: Placement, col: Placement) -> ArrayVec<Direction, 4> {
    col.horizontal().iter().chain(row.vertical()).copied().collect()
}

/// Returns legal moves of the blank at (`row`, `col`) on the board with given `dimension`.
#[inline] pub fn blank_moves_at(row: usize, col: usize, dimension: usize) -> ArrayVec<Direction, 4> {
    blank_moves(Placement::of(row, dimension), Placement::of(col, dimension))
}
