use bevy::prelude::{Deref, Event};

use crate::core::tic_tac_toe::{FinishedState, Sign};
use crate::core::GridIndex;

/// Sent when a sign is placed on the board.
#[derive(Clone, Copy, Debug, Event)]
pub struct CellUpdated {
    pos: GridIndex,
    sign: Sign,
}

impl CellUpdated {
    pub fn new(pos: GridIndex, sign: Sign) -> Self {
        Self { pos, sign }
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

/// Sent once the game reaches a terminal state.
#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct GameOver(pub FinishedState);

/// Sent when the player starts a new round.
#[derive(Clone, Copy, Debug, Event)]
pub struct GameReset;
