//! Twobody - Two-Body Gravity Simulator
//!
//! A library crate providing the simulation core (bodies, gravity,
//! integration, collisions, trails) and the Bevy plugins that drive and
//! display it.

pub mod body;
pub mod camera;
pub mod collision;
pub mod error;
pub mod input;
pub mod physics;
pub mod render;
pub mod scenarios;
pub mod simulation;
pub mod trajectory;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use error::SimulationError;
pub use simulation::{SimulationState, StepOutcome, initialize, step};
