//! Test utilities for the two-body simulation.
//!
//! Provides fixtures for building bodies and states, and assertions for
//! physical invariants like momentum conservation.

use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::body::{Body, BodyConfig};
use crate::simulation::SimulationState;

/// Fixtures for creating test bodies and states.
pub mod fixtures {
    use super::*;

    /// Radius used by every fixture body.
    pub const RADIUS: f64 = 5.0;

    /// A body at rest at `position` with the given mass.
    pub fn body_at(position: DVec2, mass: f64) -> Body {
        Body::new(&BodyConfig {
            position,
            velocity: DVec2::ZERO,
            radius: RADIUS,
            mass,
            color: Color::WHITE,
        })
        .expect("fixture body should be valid")
    }

    /// Two unit-mass bodies with the given positions and velocities.
    pub fn pair(p1: DVec2, v1: DVec2, p2: DVec2, v2: DVec2) -> SimulationState {
        let mut b1 = body_at(p1, 1.0);
        b1.velocity = v1;
        let mut b2 = body_at(p2, 1.0);
        b2.velocity = v2;
        SimulationState { bodies: [b1, b2] }
    }

    /// Two bodies far enough apart (relative to their speeds) that a short run
    /// never brings them into contact.
    pub fn wide_pair(m1: f64, m2: f64, separation: f64) -> SimulationState {
        let mut b1 = body_at(DVec2::ZERO, m1);
        let mut b2 = body_at(DVec2::new(separation, 0.0), m2);
        // Opposite tangential velocities, zero total momentum
        b1.velocity = DVec2::new(0.0, 10.0 * m2);
        b2.velocity = DVec2::new(0.0, -10.0 * m1);
        SimulationState { bodies: [b1, b2] }
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Assert that total momentum drifted by at most `tolerance` (absolute).
    ///
    /// # Panics
    /// Panics if `|final - initial|` exceeds tolerance.
    pub fn assert_momentum_conserved(initial: DVec2, final_momentum: DVec2, tolerance: f64) {
        let drift = (final_momentum - initial).length();
        assert!(
            drift <= tolerance,
            "Momentum not conserved: initial={initial:?}, final={final_momentum:?}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert every body has finite position, velocity and acceleration.
    pub fn assert_finite(state: &SimulationState) {
        for (i, body) in state.bodies.iter().enumerate() {
            assert!(
                body.position.is_finite()
                    && body.velocity.is_finite()
                    && body.acceleration.is_finite(),
                "Body {i} has non-finite state: {body:?}"
            );
        }
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_pair_has_zero_momentum() {
        let state = fixtures::wide_pair(3.0, 7.0, 1000.0);
        assertions::assert_momentum_conserved(DVec2::ZERO, state.total_momentum(), 1e-12);
    }

    #[test]
    #[should_panic(expected = "Momentum not conserved")]
    fn test_momentum_assertion_detects_drift() {
        assertions::assert_momentum_conserved(DVec2::ZERO, DVec2::new(1.0, 0.0), 0.1);
    }
}
