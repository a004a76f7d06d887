//! Preset initial conditions.
//!
//! World coordinates match the window: origin at the top-left corner, y grows
//! downward, one unit per logical pixel.

use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::body::BodyConfig;

use super::Scenario;

const RED: Color = Color::srgb(0.902, 0.161, 0.216);
const BLUE: Color = Color::srgb(0.0, 0.475, 0.945);

/// All available preset scenarios. The first one is loaded at startup.
pub static SCENARIOS: &[Scenario] = &[COLLISION_COURSE, BINARY, HEAD_ON];

/// Scenario 1: Collision Course (Default)
///
/// Two bodies moving in opposite horizontal directions, offset diagonally.
/// Gravity bends both paths until they meet and bounce.
pub const COLLISION_COURSE: Scenario = Scenario {
    id: "collision_course",
    name: "Collision Course",
    description: "Two bodies pass each other, curve inward and collide.",
    bodies: [
        BodyConfig {
            position: DVec2::new(100.0, 200.0),
            velocity: DVec2::new(150.0, 0.0),
            radius: 25.0,
            mass: 100.0,
            color: RED,
        },
        BodyConfig {
            position: DVec2::new(400.0, 500.0),
            velocity: DVec2::new(-150.0, 0.0),
            radius: 15.0,
            mass: 50.0,
            color: BLUE,
        },
    ],
};

/// Scenario 2: Binary Orbit
///
/// Circular orbit about the common center of mass at (600, 400).
/// Separation 300, relative speed sqrt(G * (m1 + m2) / d) ≈ 387.3, split
/// between the bodies in inverse proportion to their masses. Total momentum is
/// zero, so the center of mass stays put.
pub const BINARY: Scenario = Scenario {
    id: "binary",
    name: "Binary Orbit",
    description: "Near-circular orbit around a fixed center of mass.",
    bodies: [
        BodyConfig {
            position: DVec2::new(500.0, 400.0),
            velocity: DVec2::new(0.0, -129.099),
            radius: 25.0,
            mass: 100.0,
            color: RED,
        },
        BodyConfig {
            position: DVec2::new(800.0, 400.0),
            velocity: DVec2::new(0.0, 258.199),
            radius: 15.0,
            mass: 50.0,
            color: BLUE,
        },
    ],
};

/// Scenario 3: Head-On
///
/// Bodies on the same horizontal line with zero total momentum. Shows the
/// damped bounce without any oblique component.
pub const HEAD_ON: Scenario = Scenario {
    id: "head_on",
    name: "Head-On",
    description: "Straight-line approach and repeated damped bounces.",
    bodies: [
        BodyConfig {
            position: DVec2::new(300.0, 400.0),
            velocity: DVec2::new(100.0, 0.0),
            radius: 25.0,
            mass: 100.0,
            color: RED,
        },
        BodyConfig {
            position: DVec2::new(900.0, 400.0),
            velocity: DVec2::new(-200.0, 0.0),
            radius: 15.0,
            mass: 50.0,
            color: BLUE,
        },
    ],
};
