use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{GridLineBundle, MarkBundle, PlayerMark};
use super::{
    BoardLayout, TilePressed, CROSS_STROKE_WIDTH, GRID_COLOR, MARK_COLOR, MARK_MARGIN,
    NOUGHT_RADIUS_RATIO,
};
use crate::core::tic_tac_toe::Sign;
use crate::core::GridIndex;
use crate::game::{CellUpdated, GameReset};

/// Draws the divider bars of an empty board.
pub fn create(mut commands: Commands, layout: Res<BoardLayout>) {
    for bar in layout.divider_bars() {
        commands.spawn(GridLineBundle::new(
            GRID_COLOR,
            bar.size(),
            layout.to_world(bar.center()).extend(0.0),
        ));
    }
}

/// Turns an edge-triggered left click into a [`TilePressed`] event.
/// Clicks that land outside of the board are dropped.
pub fn handle_input(
    window: Query<&Window, With<PrimaryWindow>>,
    button_input: Res<ButtonInput<MouseButton>>,
    layout: Res<BoardLayout>,
    mut pressed: EventWriter<TilePressed>,
) {
    if !button_input.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    match layout.locate(cursor) {
        Some(pos) => {
            debug!("tile {} pressed", pos);
            pressed.send(TilePressed::new(pos));
        }
        None => debug!("click at {} is outside of the board", cursor),
    }
}

fn spawn_cross(commands: &mut Commands, layout: &BoardLayout, pos: GridIndex, center: Vec3) {
    let extent = layout.cell_size() - Vec2::splat(2.0 * MARK_MARGIN);
    let stroke_size = Vec2::new(extent.length(), CROSS_STROKE_WIDTH);
    let angle = extent.y.atan2(extent.x);
    commands
        .spawn(MarkBundle::new(pos, center))
        .with_children(|builder| {
            for rotation in [angle, -angle] {
                builder.spawn((
                    Sprite::from_color(MARK_COLOR, stroke_size),
                    Transform::from_rotation(Quat::from_rotation_z(rotation)),
                ));
            }
        });
}

fn spawn_nought(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    layout: &BoardLayout,
    pos: GridIndex,
    center: Vec3,
) {
    let outer_radius = layout.cell_size().min_element() / 2.0 - MARK_MARGIN;
    let inner_radius = outer_radius * NOUGHT_RADIUS_RATIO;
    commands.spawn((
        MarkBundle::new(pos, center),
        Mesh2d(meshes.add(Annulus::new(inner_radius, outer_radius))),
        MeshMaterial2d(materials.add(MARK_COLOR)),
    ));
}

/// Draws a sign in response to [`CellUpdated`].
pub fn spawn_marks(
    mut commands: Commands,
    layout: Res<BoardLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut cell_updated: EventReader<CellUpdated>,
) {
    for event in cell_updated.read() {
        let center = layout.cell_center_world(event.pos()).extend(1.0);
        match event.sign() {
            Sign::X => spawn_cross(&mut commands, &layout, event.pos(), center),
            Sign::O => spawn_nought(
                &mut commands,
                &mut meshes,
                &mut materials,
                &layout,
                event.pos(),
                center,
            ),
        }
    }
}

/// Clears all signs from the board in response to [`GameReset`].
pub fn clear_marks(
    mut commands: Commands,
    marks: Query<Entity, With<PlayerMark>>,
    mut reset: EventReader<GameReset>,
) {
    if reset.is_empty() {
        return;
    }
    reset.clear();
    for entity in marks.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::components::GridLine;
    use crate::board::BoardPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<ColorMaterial>>();
        app.insert_resource(BoardLayout::new(1000, 1000, 60, 20).unwrap());
        app.add_event::<CellUpdated>();
        app.add_event::<GameReset>();
        app.add_systems(Update, (spawn_marks, clear_marks));
        app
    }

    fn mark_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<(), With<PlayerMark>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn board_starts_with_four_divider_bars() {
        let mut app = App::new();
        app.insert_resource(BoardLayout::new(1000, 1000, 60, 20).unwrap());
        app.add_systems(Startup, create);
        app.update();

        let bars: Vec<_> = app
            .world_mut()
            .query_filtered::<&Sprite, With<GridLine>>()
            .iter(app.world())
            .filter_map(|sprite| sprite.custom_size)
            .collect();
        assert_eq!(bars.len(), 4);
        // two vertical bars, two horizontal, border to border
        assert_eq!(
            bars.iter().filter(|size| **size == Vec2::new(20.0, 880.0)).count(),
            2
        );
        assert_eq!(
            bars.iter().filter(|size| **size == Vec2::new(880.0, 20.0)).count(),
            2
        );
    }

    #[test]
    fn marks_are_spawned_per_cell_update() {
        let mut app = test_app();
        app.update();

        app.world_mut()
            .resource_mut::<Events<CellUpdated>>()
            .send(CellUpdated::new((0, 0).into(), Sign::X));
        app.update();
        assert_eq!(mark_count(&mut app), 1);

        app.world_mut()
            .resource_mut::<Events<CellUpdated>>()
            .send(CellUpdated::new((1, 1).into(), Sign::O));
        app.update();
        assert_eq!(mark_count(&mut app), 2);

        let positions: Vec<GridIndex> = app
            .world_mut()
            .query::<&PlayerMark>()
            .iter(app.world())
            .map(|mark| **mark)
            .collect();
        assert!(positions.contains(&(0, 0).into()));
        assert!(positions.contains(&(1, 1).into()));
    }

    #[test]
    fn reset_clears_every_mark() {
        let mut app = test_app();
        for (pos, sign) in [((0, 0), Sign::X), ((0, 1), Sign::O), ((2, 2), Sign::X)] {
            app.world_mut()
                .resource_mut::<Events<CellUpdated>>()
                .send(CellUpdated::new(pos.into(), sign));
        }
        app.update();
        assert_eq!(mark_count(&mut app), 3);

        app.world_mut()
            .resource_mut::<Events<GameReset>>()
            .send(GameReset);
        app.update();
        assert_eq!(mark_count(&mut app), 0);
        // cross strokes are children of their mark and go with it
        assert_eq!(
            app.world_mut()
                .query::<&Sprite>()
                .iter(app.world())
                .count(),
            0
        );
    }

    #[test]
    fn plugin_registers_board_events() {
        let mut app = App::new();
        app.insert_resource(BoardLayout::new(1000, 1000, 60, 20).unwrap());
        app.add_plugins(BoardPlugin);
        assert!(app.world().contains_resource::<Events<TilePressed>>());
    }
}
