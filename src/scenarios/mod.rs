//! Scenario system for preset initial conditions.
//!
//! Provides a small collection of two-body setups:
//! - Collision course (the default)
//! - Binary orbit
//! - Head-on approach

pub mod presets;

use bevy::prelude::*;

use crate::body::BodyConfig;
use crate::error::SimulationError;
use crate::simulation::SimulationState;
use crate::types::SimulationClock;

pub use presets::SCENARIOS;

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial conditions of body 1 and body 2.
    pub bodies: [BodyConfig; 2],
}

/// Resource tracking the active scenario.
#[derive(Resource, Default)]
pub struct CurrentScenario {
    /// Index into [`SCENARIOS`].
    pub index: usize,
}

impl CurrentScenario {
    pub fn scenario(&self) -> Option<&'static Scenario> {
        SCENARIOS.get(self.index)
    }
}

/// Plugin providing scenario management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentScenario>()
            .add_systems(Startup, log_initial_scenario);
    }
}

fn log_initial_scenario(current: Res<CurrentScenario>) {
    if let Some(scenario) = current.scenario() {
        info!("Starting scenario: {} ({})", scenario.name, scenario.id);
    }
}

/// Look up a scenario by its id.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Replace the simulation state with a fresh copy of `scenario`.
///
/// Clears the clock counters. On error the existing state is kept.
pub fn load_scenario(
    scenario: &Scenario,
    state: &mut SimulationState,
    clock: &mut SimulationClock,
) -> Result<(), SimulationError> {
    *state = SimulationState::from_scenario(scenario)?;
    clock.reset();
    info!(
        "Loading scenario: {} ({}): {}",
        scenario.name, scenario.id, scenario.description
    );
    Ok(())
}
