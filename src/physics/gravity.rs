//! Mutual Newtonian gravity between the two bodies.

use bevy::math::DVec2;

use crate::body::Body;
use crate::error::SimulationError;

/// Compute the instantaneous accelerations of `b1` and `b2`.
///
/// With `r` the separation and `u = (pos1 - pos2) / r` the unit vector from
/// body 2 toward body 1:
///
/// - `acc1 = u * (-G * m2 / r²)` pulls body 1 toward body 2
/// - `acc2 = u * ( G * m1 / r²)` pulls body 2 toward body 1
///
/// # Errors
/// [`SimulationError::DegenerateSeparation`] when the separation is not finite
/// or is at most `min_separation`.
#[inline]
pub fn compute_accelerations(
    b1: &Body,
    b2: &Body,
    gravitational_constant: f64,
    min_separation: f64,
) -> Result<(DVec2, DVec2), SimulationError> {
    let delta = b1.position - b2.position;
    let distance = delta.length();

    // Negated comparison so NaN is rejected too.
    if !(distance.is_finite() && distance > min_separation) {
        return Err(SimulationError::DegenerateSeparation { distance });
    }

    let u = delta / distance;
    let r_squared = distance * distance;

    let acc1 = u * (-gravitational_constant * b2.mass() / r_squared);
    let acc2 = u * (gravitational_constant * b1.mass() / r_squared);

    Ok((acc1, acc2))
}
