//! Window dimensions, the 2D camera and the world-to-screen mapping.
//!
//! World coordinates use the window's pixel grid: origin at the top-left
//! corner, y growing downward. Bevy's 2D camera is centered with y upward, so
//! every position is shifted and flipped before rendering.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Window width in logical pixels.
pub const SCREEN_WIDTH: u32 = 1200;

/// Window height in logical pixels.
pub const SCREEN_HEIGHT: u32 = 800;

pub const WINDOW_TITLE: &str = "2-Body Simulation";

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the camera and background.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Convert a world position to a render translation at depth `z`.
pub fn world_to_render(pos: DVec2, z: f32) -> Vec3 {
    let half_width = f64::from(SCREEN_WIDTH) / 2.0;
    let half_height = f64::from(SCREEN_HEIGHT) / 2.0;
    Vec3::new((pos.x - half_width) as f32, (half_height - pos.y) as f32, z)
}
