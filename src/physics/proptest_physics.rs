//! Property-based tests for the simulation step using proptest.
//!
//! These tests verify physical invariants across a wide range of masses,
//! positions and velocities.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::compute_accelerations;
use crate::simulation::step;
use crate::test_utils::{assertions, fixtures};
use crate::trajectory::Trajectory;
use crate::types::{DAMPING, G, MIN_SEPARATION, SimulationConfig, TRAJECTORY_LENGTH};

const DT: f64 = 1.0 / 60.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: m1 * a1 == -m2 * a2.
    #[test]
    fn prop_force_symmetry(
        x1 in -1000.0f64..1000.0,
        y1 in -1000.0f64..1000.0,
        x2 in -1000.0f64..1000.0,
        y2 in -1000.0f64..1000.0,
        m1 in 0.1f64..1000.0,
        m2 in 0.1f64..1000.0,
    ) {
        let p1 = DVec2::new(x1, y1);
        let p2 = DVec2::new(x2, y2);
        prop_assume!(p1.distance(p2) > 1.0);

        let b1 = fixtures::body_at(p1, m1);
        let b2 = fixtures::body_at(p2, m2);
        let (acc1, acc2) = compute_accelerations(&b1, &b2, G, MIN_SEPARATION).unwrap();

        let f1 = acc1 * m1;
        let f2 = acc2 * m2;
        let imbalance = (f1 + f2).length();
        prop_assert!(
            imbalance <= 1e-9 * f1.length(),
            "Forces not equal and opposite: f1={:?}, f2={:?}",
            f1, f2
        );
    }

    /// Total momentum stays constant over many small steps.
    #[test]
    fn prop_momentum_conservation(
        m1 in 1.0f64..100.0,
        m2 in 1.0f64..100.0,
        separation in 500.0f64..2000.0,
    ) {
        let mut state = fixtures::wide_pair(m1, m2, separation);
        let config = SimulationConfig::default();
        let initial = state.total_momentum();
        let scale = state.bodies[0].momentum().length();

        for _ in 0..120 {
            let outcome = step(&mut state, DT, &config).unwrap();
            prop_assume!(!outcome.collided);
        }

        assertions::assert_finite(&state);
        let tolerance = 1e-9 * scale.max(1.0);
        assertions::assert_momentum_conserved(initial, state.total_momentum(), tolerance);
    }

    /// A step that would overlap restores pre-step positions exactly and
    /// reverses and damps the integrated velocities.
    #[test]
    fn prop_collision_rollback(
        angle in 0.0f64..std::f64::consts::TAU,
        gap in 10.01f64..12.0,
        speed in 100.0f64..500.0,
    ) {
        let dir = DVec2::from_angle(angle);
        let mut state = fixtures::pair(
            DVec2::ZERO,
            dir * speed,
            dir * gap,
            -dir * speed,
        );
        let before = state.clone();

        let outcome = step(&mut state, DT, &SimulationConfig::default()).unwrap();
        prop_assert!(outcome.collided);

        for (after, before) in state.bodies.iter().zip(&before.bodies) {
            prop_assert_eq!(after.position, before.position);
            let integrated = before.velocity + after.acceleration * DT;
            prop_assert_eq!(after.velocity, integrated * -DAMPING);
        }
    }

    /// The trail never exceeds its capacity and keeps the latest samples in order.
    #[test]
    fn prop_trajectory_bounds(count in 0usize..350) {
        let mut trajectory = Trajectory::<TRAJECTORY_LENGTH>::new();
        let samples: Vec<DVec2> = (0..count)
            .map(|i| DVec2::new(i as f64, 2.0 * i as f64))
            .collect();

        for &sample in &samples {
            trajectory.push(sample);
            prop_assert!(trajectory.len() <= TRAJECTORY_LENGTH);
        }

        let expected = &samples[count.saturating_sub(TRAJECTORY_LENGTH)..];
        let stored: Vec<DVec2> = trajectory.iter().collect();
        prop_assert_eq!(stored.as_slice(), expected);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use crate::simulation::initialize;

    #[test]
    fn test_default_scenario_momentum_before_contact() {
        // The default pair takes well over a second to meet
        let mut state = initialize();
        let config = SimulationConfig::default();
        let initial = state.total_momentum();

        for _ in 0..30 {
            let outcome = step(&mut state, DT, &config).unwrap();
            assert!(!outcome.collided);
        }

        assertions::assert_momentum_conserved(initial, state.total_momentum(), 1e-6);
    }

    #[test]
    fn test_default_scenario_stays_finite() {
        let mut state = initialize();
        let config = SimulationConfig::default();

        for _ in 0..600 {
            step(&mut state, DT, &config).unwrap();
            assertions::assert_finite(&state);
        }
    }
}
