//! Rendering for the two-body simulation.
//!
//! [`render`] is the read-only projection of [`SimulationState`] onto circle
//! draw calls. The Bevy side collects those calls into a [`DrawList`] each
//! frame and mirrors it onto a pool of 2D circle meshes.

mod sync;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::physics::PhysicsSet;
use crate::simulation::SimulationState;
use crate::types::TRAJECTORY_POINT_RADIUS;

use self::sync::{setup_circle_assets, sync_circle_slots};

/// One filled circle to draw, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDraw {
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

/// Draw calls produced by [`render`] for the current frame, in order.
#[derive(Resource, Clone, Default, Debug, PartialEq)]
pub struct DrawList {
    pub circles: Vec<CircleDraw>,
}

/// Project the simulation state onto `draw_circle(center, radius, color)` calls.
///
/// Emits every trail sample of both bodies (oldest-first) as small dots, then
/// each body as a filled circle, so bodies always cover trails.
pub fn render<F>(state: &SimulationState, mut draw_circle: F)
where
    F: FnMut(DVec2, f64, Color),
{
    for body in &state.bodies {
        for sample in body.trajectory.iter() {
            draw_circle(sample, TRAJECTORY_POINT_RADIUS, body.color);
        }
    }

    for body in &state.bodies {
        draw_circle(body.position, body.radius(), body.color);
    }
}

/// Rebuild the draw list from the current state.
pub fn collect_draw_list(state: Res<SimulationState>, mut list: ResMut<DrawList>) {
    list.circles.clear();
    render(&state, |center, radius, color| {
        list.circles.push(CircleDraw { center, radius, color });
    });
}

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .add_systems(Startup, setup_circle_assets)
            // Draw after the step so the frame shows the updated bodies
            .add_systems(
                Update,
                (collect_draw_list, sync_circle_slots)
                    .chain()
                    .after(PhysicsSet),
            );
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Base depth of the first draw call.
    pub const BASE: f32 = 0.0;
    /// Depth added per draw call so later calls are drawn on top.
    pub const STEP: f32 = 1e-3;
}
