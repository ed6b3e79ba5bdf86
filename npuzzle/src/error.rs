use thiserror::Error;

/// Reasons for rejecting a grid given to construct a [`Board`](crate::board::Board).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no cells at all.
    #[error("board dimension must be positive")]
    EmptyBoard,

    /// The number of cells does not fit tile labels.
    #[error("board dimension {dimension} is too large")]
    TooLarge { dimension: usize },

    /// A row of an explicit grid has a different length than the number of rows.
    #[error("row {row} has {len} tiles but the board has {dimension} rows")]
    NotSquare { row: usize, len: usize, dimension: usize },

    /// The number of tiles differs from `dimension * dimension`.
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    /// The tile label is larger than `dimension * dimension - 1`.
    #[error("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u32, max: u32 },

    /// The tile label occurs more than once.
    #[error("tile {tile} occurs more than once")]
    DuplicateTile { tile: u32 },

    /// The text representation does not start with the dimension.
    #[error("missing board dimension")]
    MissingDimension,

    /// The text representation contains a token which is not a non-negative integer.
    #[error("'{token}' is not a valid number")]
    InvalidNumber { token: String },
}

/// Reasons for refusing to construct a [`Solver`](crate::solver::Solver).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// No initial board was given.
    #[error("the initial board is missing")]
    MissingBoard,
}
