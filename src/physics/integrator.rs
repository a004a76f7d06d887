//! Semi-implicit Euler integration.
//!
//! Velocity is advanced from this step's acceleration first, then position is
//! advanced from the new velocity. There is no sub-stepping, so a stalled
//! frame (large `dt`) integrates in one coarse jump.

use bevy::math::DVec2;

use crate::body::Body;

/// Advance `body.velocity` by `body.acceleration * dt`.
#[inline]
pub fn integrate_velocity(body: &mut Body, dt: f64) {
    body.velocity += body.acceleration * dt;
}

/// Advance `body.position` by `body.velocity * dt`.
///
/// Returns the position before the update so the caller can roll it back.
#[inline]
pub fn integrate_position(body: &mut Body, dt: f64) -> DVec2 {
    let prev_position = body.position;
    body.position += body.velocity * dt;
    prev_position
}
