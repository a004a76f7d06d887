//! Collision detection and response between the two bodies.
//!
//! When the integrated circles overlap, the position update of that step is
//! rejected and both velocities are reversed and damped:
//! - positions roll back to where they were before integration
//! - `velocity *= -damping` for each body
//!
//! The whole velocity vector is reversed, not only its component along the
//! line of centers, so glancing contacts bounce straight back.

use bevy::math::DVec2;

use crate::body::Body;

/// Whether the two circles overlap (strictly closer than the sum of radii).
#[inline]
pub fn circles_overlap(pos1: DVec2, r1: f64, pos2: DVec2, r2: f64) -> bool {
    let min_dist = r1 + r2;
    pos1.distance_squared(pos2) < min_dist * min_dist
}

/// Whether `b1` and `b2` currently overlap.
#[inline]
pub fn bodies_overlap(b1: &Body, b2: &Body) -> bool {
    circles_overlap(b1.position, b1.radius(), b2.position, b2.radius())
}

/// Restore a body's pre-integration position and bounce its velocity.
#[inline]
pub fn resolve_collision(body: &mut Body, prev_position: DVec2, damping: f64) {
    body.position = prev_position;
    body.velocity *= -damping;
}
