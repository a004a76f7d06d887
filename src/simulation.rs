//! Simulation state and the per-frame step.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::Body;
use crate::collision::{bodies_overlap, resolve_collision};
use crate::error::SimulationError;
use crate::physics::{compute_accelerations, integrate_position, integrate_velocity};
use crate::scenarios::{SCENARIOS, Scenario};
use crate::types::SimulationConfig;

/// What happened during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The integrated positions overlapped and were rolled back.
    pub collided: bool,
}

/// The two bodies, owned by value.
#[derive(Resource, Clone, Debug)]
pub struct SimulationState {
    pub bodies: [Body; 2],
}

impl Default for SimulationState {
    fn default() -> Self {
        initialize()
    }
}

/// Build the starting state from the first preset.
pub fn initialize() -> SimulationState {
    let [b1, b2] = SCENARIOS[0].bodies;
    SimulationState {
        bodies: [Body::from_preset(b1), Body::from_preset(b2)],
    }
}

impl SimulationState {
    /// Build a state from a scenario, validating both bodies.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SimulationError> {
        let [c1, c2] = &scenario.bodies;
        Ok(Self {
            bodies: [Body::new(c1)?, Body::new(c2)?],
        })
    }

    /// Advance both bodies by `dt` seconds. See [`step`].
    pub fn step(
        &mut self,
        dt: f64,
        config: &SimulationConfig,
    ) -> Result<StepOutcome, SimulationError> {
        step(self, dt, config)
    }

    /// Total linear momentum of the pair.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position.
    pub fn center_of_mass(&self) -> DVec2 {
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        let weighted: DVec2 = self.bodies.iter().map(|b| b.position * b.mass()).sum();
        weighted / total_mass
    }

    /// Kinetic plus gravitational potential energy.
    pub fn total_energy(&self, gravitational_constant: f64) -> f64 {
        let [b1, b2] = &self.bodies;
        let distance = b1.position.distance(b2.position);
        let potential = -gravitational_constant * b1.mass() * b2.mass() / distance;
        b1.kinetic_energy() + b2.kinetic_energy() + potential
    }
}

/// Advance the simulation by one frame of `dt` seconds.
///
/// 1. Compute both accelerations from the current positions.
/// 2. `v += a * dt`, then `x += v * dt`.
/// 3. If the circles overlap, restore the pre-step positions and set
///    `v = -damping * v`.
/// 4. Append each final position to its body's trajectory.
///
/// # Errors
/// Returns an error without touching `state` when `dt` is not finite, the
/// config is invalid or the bodies are too close for a force computation.
pub fn step(
    state: &mut SimulationState,
    dt: f64,
    config: &SimulationConfig,
) -> Result<StepOutcome, SimulationError> {
    if !dt.is_finite() {
        return Err(SimulationError::InvalidTimeStep(dt));
    }
    config.validate()?;

    let [b1, b2] = &mut state.bodies;

    let (acc1, acc2) = compute_accelerations(
        b1,
        b2,
        config.gravitational_constant,
        config.min_separation,
    )?;
    b1.acceleration = acc1;
    b2.acceleration = acc2;

    integrate_velocity(b1, dt);
    integrate_velocity(b2, dt);

    let prev1 = integrate_position(b1, dt);
    let prev2 = integrate_position(b2, dt);

    let collided = bodies_overlap(b1, b2);
    if collided {
        resolve_collision(b1, prev1, config.damping);
        resolve_collision(b2, prev2, config.damping);
    }

    b1.trajectory.push(b1.position);
    b2.trajectory.push(b2.position);

    Ok(StepOutcome { collided })
}
