mod components;
mod systems;

use bevy::prelude::*;

use systems::*;

const STATUS_FONT_SIZE: f32 = 50.0;
const STATUS_TEXT_COLOR: Color = Color::WHITE;

pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (show_status, clear_status));
    }
}
