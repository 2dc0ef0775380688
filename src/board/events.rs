use bevy::prelude::Event;

use crate::core::GridIndex;

/// Sent when the player clicks inside a board cell.
#[derive(Clone, Copy, Debug, Event)]
pub struct TilePressed {
    pos: GridIndex,
}

impl TilePressed {
    pub fn new(pos: GridIndex) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }
}
