//! Common test utilities for integration tests.

use twobody::scenarios::get_scenario;
use twobody::types::SimulationConfig;
use twobody::{SimulationState, StepOutcome};

/// One frame at 60 FPS.
pub const DT: f64 = 1.0 / 60.0;

/// Build a fresh state from a preset id.
pub fn scenario_state(id: &str) -> SimulationState {
    let scenario = get_scenario(id).unwrap_or_else(|| panic!("unknown scenario {id}"));
    SimulationState::from_scenario(scenario).expect("preset should be valid")
}

/// Step `frames` times at [`DT`], returning every outcome.
pub fn run_frames(state: &mut SimulationState, frames: usize) -> Vec<StepOutcome> {
    let config = SimulationConfig::default();
    (0..frames)
        .map(|_| state.step(DT, &config).expect("step should succeed"))
        .collect()
}

/// Squared distance between the two bodies.
pub fn separation_squared(state: &SimulationState) -> f64 {
    state.bodies[0].position.distance_squared(state.bodies[1].position)
}
