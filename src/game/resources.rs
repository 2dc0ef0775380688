use bevy::prelude::{Deref, DerefMut, Resource};

use crate::core::tic_tac_toe::TicTacToe;

/// The game running in this window.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct LocalGame(TicTacToe);
