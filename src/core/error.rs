#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside of the board")]
    CellOutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn cell_out_of_bounds(row: usize, col: usize) -> Self {
        Self::CellOutOfBounds { row, col }
    }

    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }
}
