//! Core constants and configuration resources for the two-body simulation.

use bevy::prelude::*;

use crate::error::SimulationError;

/// Gravitational constant in simulation units.
///
/// Not SI-scaled: chosen so bodies a few hundred pixels apart visibly attract
/// within a few seconds of wall-clock time.
pub const G: f64 = 3e5;

/// Fraction of velocity kept (and reversed) when the bodies collide.
pub const DAMPING: f64 = 0.95;

/// Number of past positions kept per body for the trail.
pub const TRAJECTORY_LENGTH: usize = 100;

/// Radius of a single trail dot.
pub const TRAJECTORY_POINT_RADIUS: f64 = 1.0;

/// Below this separation the gravity computation is rejected.
pub const MIN_SEPARATION: f64 = 1e-6;

/// Slowest and fastest allowed time scale multipliers.
pub const MIN_TIME_SCALE: f64 = 0.125;
pub const MAX_TIME_SCALE: f64 = 8.0;

/// Tunable physics parameters used by every simulation step.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant. Default: [`G`].
    pub gravitational_constant: f64,
    /// Velocity factor applied (negated) on collision. Default: [`DAMPING`].
    pub damping: f64,
    /// Minimum separation for a valid force computation. Default: [`MIN_SEPARATION`].
    pub min_separation: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            damping: DAMPING,
            min_separation: MIN_SEPARATION,
        }
    }
}

impl SimulationConfig {
    /// Check every parameter before it reaches a step.
    ///
    /// Damping must lie strictly between 0 and 1, the gravitational constant
    /// must be finite and the minimum separation finite and non-negative.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SimulationError::InvalidDamping(self.damping));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(SimulationError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(SimulationError::InvalidMinSeparation(self.min_separation));
        }
        Ok(())
    }
}

/// Frame-loop bookkeeping owned by the harness.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Whether stepping is suspended.
    pub paused: bool,
    /// Multiplier applied to the frame's elapsed time.
    pub scale: f64,
    /// Number of successful steps since the last reset.
    pub steps: u64,
    /// Simulated seconds since the last reset.
    pub elapsed: f64,
    /// Number of collisions resolved since the last reset.
    pub collisions: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            paused: false,
            scale: 1.0,
            steps: 0,
            elapsed: 0.0,
            collisions: 0,
        }
    }
}

impl SimulationClock {
    /// Record one completed step of `dt` simulated seconds.
    pub fn record_step(&mut self, dt: f64, collided: bool) {
        self.steps += 1;
        self.elapsed += dt;
        if collided {
            self.collisions += 1;
        }
    }

    /// Clear the counters, keeping the pause flag and scale.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.elapsed = 0.0;
        self.collisions = 0;
    }

    /// Multiply the time scale by `factor`, clamped to the allowed range.
    pub fn rescale(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }
}
