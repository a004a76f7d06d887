//! Twobody - Two-Body Gravity Simulator
//!
//! A desktop application showing two bodies attracting, colliding and
//! leaving trails.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use twobody::camera::{CameraPlugin, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use twobody::input::InputPlugin;
use twobody::physics::PhysicsPlugin;
use twobody::render::RenderPlugin;
use twobody::scenarios::ScenarioPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Add simulation plugins
        .add_plugins((
            ScenarioPlugin,
            PhysicsPlugin,
            InputPlugin,
            CameraPlugin,
            RenderPlugin,
        ))
        .run();
}
