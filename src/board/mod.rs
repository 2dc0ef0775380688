mod components;
mod events;
mod layout;
mod systems;

use bevy::prelude::*;

pub use events::TilePressed;
pub use layout::{BoardLayout, LayoutError};

use systems::*;

const GRID_COLOR: Color = Color::WHITE;
const MARK_COLOR: Color = Color::WHITE;
const MARK_MARGIN: f32 = 40.0;
const CROSS_STROKE_WIDTH: f32 = 15.0;
const NOUGHT_RADIUS_RATIO: f32 = 0.85;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TilePressed>()
            .add_systems(Startup, create)
            .add_systems(Update, (handle_input, spawn_marks, clear_marks));
    }
}
