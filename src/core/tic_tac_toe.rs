use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;

use super::{GameError, GameResult, Grid, GridIndex};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: usize = 3;

/// The sign that makes the opening move.
pub const FIRST_PLAYER: Sign = Sign::X;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    O,
    X,
}

impl Sign {
    /// Returns the sign of the opposing player.
    pub fn other(&self) -> Self {
        match self {
            Self::O => Self::X,
            Self::X => Self::O,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::O => f.write_str("noughts"),
            Self::X => f.write_str("crosses"),
        }
    }
}

pub type Cell = Option<Sign>;

pub type Board = Grid<Cell, U3>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FinishedState {
    Win(Sign),
    Draw,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Turn(Sign),
    Finished(FinishedState),
}

/// Returns every line of three cells that wins the game:
/// three rows, three columns and both diagonals.
pub fn winning_combinations() -> [(GridIndex, GridIndex, GridIndex); 8] {
    [
        ((0, 0), (0, 1), (0, 2)),
        ((1, 0), (1, 1), (1, 2)),
        ((2, 0), (2, 1), (2, 2)),
        ((0, 0), (1, 0), (2, 0)),
        ((0, 1), (1, 1), (2, 1)),
        ((0, 2), (1, 2), (2, 2)),
        ((0, 0), (1, 1), (2, 2)),
        ((0, 2), (1, 1), (2, 0)),
    ]
    .map(|(a, b, c)| (a.into(), b.into(), c.into()))
}

/// Returns `true` if some winning combination is fully held by `sign`.
pub fn sign_has_won(board: &Board, sign: Sign) -> bool {
    winning_combinations()
        .into_iter()
        .any(|(a, b, c)| [a, b, c].into_iter().all(|pos| board[pos] == Some(sign)))
}

/// Returns `true` if every cell of the board holds a sign.
pub fn board_is_full(board: &Board) -> bool {
    board.iter().flatten().all(|cell| cell.is_some())
}

/// Checks the board for a terminal state.
/// Win takes precedence over draw; noughts are checked before crosses.
pub fn evaluate(board: &Board) -> Option<FinishedState> {
    for sign in [Sign::O, Sign::X] {
        if sign_has_won(board, sign) {
            return Some(FinishedState::Win(sign));
        }
    }
    board_is_full(board).then_some(FinishedState::Draw)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TicTacToe {
    state: GameState,
    field: Board,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            state: GameState::Turn(FIRST_PLAYER),
            field: Board::default(),
        }
    }
}

impl TicTacToe {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.field
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Returns the sign whose move it is, `None` once the game is finished.
    pub fn current_player(&self) -> Option<Sign> {
        match self.state {
            GameState::Turn(sign) => Some(sign),
            GameState::Finished(_) => None,
        }
    }

    /// Places the current player's sign at `pos`.
    /// Fails without touching the board if the game is over,
    /// `pos` is outside of it or the cell is occupied.
    pub fn update(&mut self, pos: GridIndex) -> GameResult<GameState> {
        let sign = match self.state {
            GameState::Turn(sign) => sign,
            GameState::Finished(_) => return Err(GameError::GameIsFinished),
        };
        let cell = self
            .field
            .get_mut(pos)
            .ok_or_else(|| GameError::cell_out_of_bounds(pos.row(), pos.col()))?;
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(pos.row(), pos.col()));
        }
        *cell = Some(sign);

        self.state = match evaluate(&self.field) {
            Some(finished) => GameState::Finished(finished),
            None => GameState::Turn(sign.other()),
        };
        Ok(self.state)
    }

    /// Clears the board and gives the turn back to the opening player.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
