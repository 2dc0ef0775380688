mod events;
mod resources;
mod systems;

use bevy::prelude::*;

pub use events::{CellUpdated, GameOver, GameReset};
pub use resources::LocalGame;

use systems::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CellUpdated>()
            .add_event::<GameOver>()
            .add_event::<GameReset>()
            .init_resource::<LocalGame>()
            .add_systems(Update, (handle_reset_input, apply_action));
    }
}
