use bevy::prelude::*;

use super::{STATUS_FONT_SIZE, STATUS_TEXT_COLOR};

/// Marker for the status line under the board.
#[derive(Component)]
pub struct StatusText;

#[derive(Bundle)]
pub struct StatusTextBundle {
    text: Text2d,
    font: TextFont,
    color: TextColor,
    transform: Transform,
    status: StatusText,
}

impl StatusTextBundle {
    pub fn new(message: impl Into<String>, translation: Vec3) -> Self {
        Self {
            text: Text2d::new(message),
            font: TextFont {
                font_size: STATUS_FONT_SIZE,
                ..default()
            },
            color: TextColor(STATUS_TEXT_COLOR),
            transform: Transform::from_translation(translation),
            status: StatusText,
        }
    }
}
