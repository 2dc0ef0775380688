mod board;
mod core;
mod game;
mod interface;

use std::time::Duration;

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};

use crate::board::{BoardLayout, BoardPlugin};
use crate::game::GamePlugin;
use crate::interface::InterfacePlugin;

const WINDOW_TITLE: &str = "Noughts & Crosses";
const WINDOW_WIDTH: u32 = 1000;
const WINDOW_HEIGHT: u32 = 1000;
const BORDER_OFFSET: u32 = 60;
const LINE_THICKNESS: u32 = 20;
const TARGET_FPS: f64 = 30.0;

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let layout = match BoardLayout::new(WINDOW_WIDTH, WINDOW_HEIGHT, BORDER_OFFSET, LINE_THICKNESS)
    {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("invalid window configuration: {err}");
            std::process::exit(1);
        }
    };
    let frame_interval = Duration::from_secs_f64(1.0 / TARGET_FPS);
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(frame_interval),
            unfocused_mode: UpdateMode::reactive_low_power(frame_interval),
        })
        .insert_resource(layout)
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.into(),
                    resolution: (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            GamePlugin,
            BoardPlugin,
            InterfacePlugin,
        ))
        .add_systems(Startup, init_camera)
        .run();
}
