use bevy::prelude::*;

use crate::core::GridIndex;

/// Marker for the divider bars between cells.
#[derive(Component)]
pub struct GridLine;

/// A sign drawn inside the cell it points to.
#[derive(Clone, Copy, Debug, PartialEq, Component, Deref)]
pub struct PlayerMark(GridIndex);

impl From<GridIndex> for PlayerMark {
    fn from(value: GridIndex) -> Self {
        Self(value)
    }
}

#[derive(Bundle)]
pub struct GridLineBundle {
    sprite: Sprite,
    transform: Transform,
    line: GridLine,
}

impl GridLineBundle {
    pub fn new(color: Color, size: Vec2, translation: Vec3) -> Self {
        Self {
            sprite: Sprite::from_color(color, size),
            transform: Transform::from_translation(translation),
            line: GridLine,
        }
    }
}

/// Common part of a drawn sign: the shapes that make up a cross or
/// a nought are spawned around it.
#[derive(Bundle)]
pub struct MarkBundle {
    mark: PlayerMark,
    transform: Transform,
    visibility: Visibility,
}

impl MarkBundle {
    pub fn new(pos: GridIndex, translation: Vec3) -> Self {
        Self {
            mark: pos.into(),
            transform: Transform::from_translation(translation),
            visibility: Visibility::default(),
        }
    }
}
