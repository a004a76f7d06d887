//! Error type for the simulation core.

/// Failures the core reports instead of producing non-finite state.
///
/// Every fallible operation checks its inputs before mutating anything, so a
/// returned error means the simulation state is exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("bodies are too close to compute gravity (separation {distance})")]
    DegenerateSeparation { distance: f64 },

    #[error("invalid body: mass {mass} and radius {radius} must both be positive")]
    InvalidConfiguration { mass: f64, radius: f64 },

    #[error("invalid damping factor {0} (must be in (0, 1))")]
    InvalidDamping(f64),

    #[error("invalid gravitational constant {0} (must be finite)")]
    InvalidGravitationalConstant(f64),

    #[error("invalid minimum separation {0} (must be finite and non-negative)")]
    InvalidMinSeparation(f64),

    #[error("invalid time step {0} (must be finite)")]
    InvalidTimeStep(f64),
}
