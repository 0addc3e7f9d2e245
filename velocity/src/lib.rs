//! # Velocity based training
//!
//! Training intensity from bar speed instead of load.
//!
//! - [`zones`] - per-exercise velocity zones and classification
//! - [`load`] - 1RM from the load-velocity profile and relative intensity
//! - [`analysis`] - history-driven heuristic analysis of a set

pub mod analysis;
pub mod load;
pub mod zones;

pub use self::analysis::{LiftSample, VbtEntry};
pub use self::load::LoadProfile;
pub use self::zones::{VbtExercise, VelocityClass, VelocityZone, classify_velocity};

/// Input outside the valid domain of a velocity formula.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("velocity must be a non-negative finite number: {0}")]
    BadVelocity(f64),

    #[error("velocity too high: {0} m/s leaves no load factor")]
    VelocityTooHigh(f64),

    #[error("weight must be a positive finite number: {0}")]
    BadWeight(f64),
}

pub(crate) fn check_weight(weight: f64) -> Result<(), DomainError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(DomainError::BadWeight(weight));
    }

    Ok(())
}
