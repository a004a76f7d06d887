//! Simulated point masses.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::error::SimulationError;
use crate::trajectory::Trajectory;
use crate::types::TRAJECTORY_LENGTH;

/// Initial conditions for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyConfig {
    /// Starting position in world coordinates.
    pub position: DVec2,
    /// Starting velocity in units per second.
    pub velocity: DVec2,
    /// Collision and render radius.
    pub radius: f64,
    /// Gravitational mass.
    pub mass: f64,
    /// Fill color, never read by the physics.
    pub color: Color,
}

impl BodyConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.mass) && valid(self.radius) {
            Ok(())
        } else {
            Err(SimulationError::InvalidConfiguration {
                mass: self.mass,
                radius: self.radius,
            })
        }
    }
}

/// One simulated mass point and its recent trail.
#[derive(Clone, Debug)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Acceleration from the most recent step. Overwritten every step.
    pub acceleration: DVec2,
    radius: f64,
    mass: f64,
    pub color: Color,
    pub trajectory: Trajectory<TRAJECTORY_LENGTH>,
}

impl Body {
    /// Create a body from its initial conditions, in the `Filling` trajectory state.
    ///
    /// Fails if `mass` or `radius` is not a positive finite number.
    pub fn new(config: &BodyConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self::from_preset(*config))
    }

    /// Build without validation. Only for the built-in presets, which are
    /// checked by `scenarios` tests.
    pub(crate) fn from_preset(config: BodyConfig) -> Self {
        Self {
            position: config.position,
            velocity: config.velocity,
            acceleration: DVec2::ZERO,
            radius: config.radius,
            mass: config.mass,
            color: config.color,
            trajectory: Trajectory::new(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy `m * v² / 2`.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
