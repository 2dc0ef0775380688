use bevy::prelude::*;

use super::{CellUpdated, GameOver, GameReset, LocalGame};
use crate::board::TilePressed;
use crate::core::tic_tac_toe::GameState;
use crate::core::GameError;

/// Applies pressed tiles to the game, announcing placed signs and the
/// terminal state. Presses on occupied cells or after the game is over
/// are dropped.
pub fn apply_action(
    mut game: ResMut<LocalGame>,
    mut tile_pressed: EventReader<TilePressed>,
    mut cell_updated: EventWriter<CellUpdated>,
    mut game_over: EventWriter<GameOver>,
) {
    for event in tile_pressed.read() {
        let Some(sign) = game.current_player() else {
            debug!("tile {} pressed after the game is over", event.pos());
            continue;
        };
        match game.update(event.pos()) {
            Ok(state) => {
                cell_updated.send(CellUpdated::new(event.pos(), sign));
                if let GameState::Finished(finished) = state {
                    game_over.send(GameOver(finished));
                }
            }
            Err(err @ GameError::CellIsOccupied { .. }) => {
                debug!("tile {} pressed: {}", event.pos(), err);
            }
            Err(err) => error!("failed to apply press on tile {}: {}", event.pos(), err),
        }
    }
}

/// Starts a new round on an edge-triggered press of the reset key.
pub fn handle_reset_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<LocalGame>,
    mut reset: EventWriter<GameReset>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        game.reset();
        reset.send(GameReset);
        debug!("game reset");
    }
}
