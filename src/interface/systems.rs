use bevy::prelude::*;

use super::components::{StatusText, StatusTextBundle};
use super::STATUS_FONT_SIZE;
use crate::board::BoardLayout;
use crate::core::tic_tac_toe::{FinishedState, Sign};
use crate::game::{GameOver, GameReset};

fn status_message(state: FinishedState) -> &'static str {
    match state {
        FinishedState::Win(Sign::X) => "Crosses win!",
        FinishedState::Win(Sign::O) => "Noughts win!",
        FinishedState::Draw => "Draw!",
    }
}

/// Shows the verdict under the board once the game is over.
pub fn show_status(
    mut commands: Commands,
    layout: Res<BoardLayout>,
    mut game_over: EventReader<GameOver>,
) {
    for event in game_over.read() {
        let message = status_message(**event);
        info!("game over: {}", message);
        let window = layout.window_size();
        let translation = layout
            .to_world(Vec2::new(window.x / 2.0, window.y - STATUS_FONT_SIZE))
            .extend(2.0);
        commands.spawn(StatusTextBundle::new(message, translation));
    }
}

/// Removes the verdict when a new round starts.
pub fn clear_status(
    mut commands: Commands,
    status: Query<Entity, With<StatusText>>,
    mut reset: EventReader<GameReset>,
) {
    if reset.is_empty() {
        return;
    }
    reset.clear();
    for entity in status.iter() {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(BoardLayout::new(1000, 1000, 60, 20).unwrap());
        app.add_event::<GameOver>();
        app.add_event::<GameReset>();
        app.add_systems(Update, (show_status, clear_status));
        app
    }

    fn status_lines(app: &mut App) -> Vec<String> {
        app.world_mut()
            .query_filtered::<&Text2d, With<StatusText>>()
            .iter(app.world())
            .map(|text| text.0.clone())
            .collect()
    }

    #[test]
    fn messages_match_the_verdict() {
        assert_eq!(status_message(FinishedState::Win(Sign::X)), "Crosses win!");
        assert_eq!(status_message(FinishedState::Win(Sign::O)), "Noughts win!");
        assert_eq!(status_message(FinishedState::Draw), "Draw!");
    }

    #[test]
    fn verdict_is_shown_on_game_over() {
        let mut app = test_app();
        assert!(status_lines(&mut app).is_empty());

        app.world_mut()
            .resource_mut::<Events<GameOver>>()
            .send(GameOver(FinishedState::Win(Sign::O)));
        app.update();
        assert_eq!(status_lines(&mut app), ["Noughts win!"]);
    }

    #[test]
    fn verdict_is_cleared_on_reset() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<Events<GameOver>>()
            .send(GameOver(FinishedState::Draw));
        app.update();
        assert_eq!(status_lines(&mut app), ["Draw!"]);

        app.world_mut()
            .resource_mut::<Events<GameReset>>()
            .send(GameReset);
        app.update();
        assert!(status_lines(&mut app).is_empty());
    }
}
