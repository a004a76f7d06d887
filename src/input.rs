//! Keyboard controls for the simulation.
//!
//! - `Space`: pause / resume
//! - `R`: reset the current scenario
//! - `1`..`3`: load a preset scenario
//! - `[` / `]`: halve / double the time scale

use bevy::prelude::*;

use crate::physics::PhysicsSet;
use crate::scenarios::{CurrentScenario, SCENARIOS, load_scenario};
use crate::simulation::SimulationState;
use crate::types::SimulationClock;

const SCENARIO_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts.before(PhysicsSet));
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut state: ResMut<SimulationState>,
    mut current: ResMut<CurrentScenario>,
) {
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.rescale(0.5);
        info!("Time scale: {}x", clock.scale);
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        clock.rescale(2.0);
        info!("Time scale: {}x", clock.scale);
    }

    let selected = SCENARIO_KEYS
        .iter()
        .position(|key| keys.just_pressed(*key))
        .filter(|&index| index < SCENARIOS.len());

    let reload = if let Some(index) = selected {
        current.index = index;
        true
    } else {
        keys.just_pressed(KeyCode::KeyR)
    };

    if !reload {
        return;
    }

    let Some(scenario) = current.scenario() else {
        return;
    };

    match load_scenario(scenario, &mut state, &mut clock) {
        // A degenerate-separation pause should not survive a reset
        Ok(()) => clock.paused = false,
        Err(err) => warn!("Failed to load scenario {}: {err}", scenario.id),
    }
}
