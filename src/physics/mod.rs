//! Physics for the two-body simulation.
//!
//! The pure pieces (gravity, integration) live in submodules and are combined
//! by [`crate::simulation::step`]. This module also provides the Bevy system
//! that calls the step once per rendered frame.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::compute_accelerations;
pub use integrator::{integrate_position, integrate_velocity};

use crate::simulation::SimulationState;
use crate::types::{SimulationClock, SimulationConfig};

/// System set for the per-frame simulation step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicsSet;

/// Plugin providing the per-frame physics step.
///
/// Runs in `Update` rather than `FixedUpdate`: the step consumes the elapsed
/// time of each rendered frame directly.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .init_resource::<SimulationClock>()
            .init_resource::<SimulationState>()
            .add_systems(Startup, check_config)
            .add_systems(Update, physics_step.in_set(PhysicsSet));
    }
}

/// Pause the simulation if the configuration is unusable.
fn check_config(config: Res<SimulationConfig>, mut clock: ResMut<SimulationClock>) {
    if let Err(err) = config.validate() {
        warn!("Invalid simulation config: {err}");
        clock.paused = true;
    }
}

/// Main physics system.
///
/// Advances the simulation by the frame's elapsed time scaled by the clock.
/// A failed step pauses the clock; the state is left as it was.
fn physics_step(
    mut state: ResMut<SimulationState>,
    mut clock: ResMut<SimulationClock>,
    config: Res<SimulationConfig>,
    time: Res<Time>,
) {
    if clock.paused {
        return;
    }

    let dt = time.delta_secs_f64() * clock.scale;

    match state.step(dt, &config) {
        Ok(outcome) => {
            clock.record_step(dt, outcome.collided);
            if outcome.collided {
                debug!("Collision #{} at t={:.2}s", clock.collisions, clock.elapsed);
            }
        }
        Err(err) => {
            warn!("Simulation paused: {err}");
            clock.paused = true;
        }
    }
}
