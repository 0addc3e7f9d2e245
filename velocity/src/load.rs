//! Load-velocity profile.
//!
//! ```notrust
//! LoadFactor = 1 - (a x v² + b x v)
//! 1RM = round(Weight / LoadFactor)
//! ```
//!
//! Where:
//!
//! - v - mean concentric velocity in m/s
//! - a, b - profile coefficients of the movement pattern

use crate::{DomainError, VbtExercise, check_weight};

/// Movement pattern with its own load-velocity coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LoadProfile {
    Squat,
    Bench,
    Deadlift,
    Pull,
    Row,
    Press,
    #[default]
    Default,
}

impl LoadProfile {
    /// `(a, b)` coefficients.
    pub const fn coefficients(self) -> (f64, f64) {
        match self {
            LoadProfile::Squat => (0.77, 2.07),
            LoadProfile::Bench => (0.74, 1.92),
            LoadProfile::Deadlift => (0.59, 1.71),
            LoadProfile::Pull => (0.68, 1.82),
            LoadProfile::Row => (0.70, 1.98),
            LoadProfile::Press => (0.75, 1.85),
            LoadProfile::Default => (0.71, 1.90),
        }
    }

    /// Share of 1RM the load represents at `velocity`. Not positive when the
    /// velocity is faster than the profile allows.
    pub fn load_factor(self, velocity: f64) -> f64 {
        let (a, b) = self.coefficients();
        1.0 - (a * velocity.powi(2) + b * velocity)
    }
}

impl From<VbtExercise> for LoadProfile {
    /// Only the three basic lifts have a dedicated profile.
    fn from(exercise: VbtExercise) -> Self {
        match exercise {
            VbtExercise::Squat => LoadProfile::Squat,
            VbtExercise::Bench => LoadProfile::Bench,
            VbtExercise::Deadlift => LoadProfile::Deadlift,
            _ => LoadProfile::Default,
        }
    }
}

/// Calculate 1RM from a single set's load and velocity, rounded to a whole
/// kilogram.
///
/// # Params
/// - `weight` - lifted load in kg
/// - `velocity` - mean concentric velocity in m/s
pub fn one_rm_from_velocity(
    weight: f64,
    velocity: f64,
    profile: LoadProfile,
) -> Result<f64, DomainError> {
    check_weight(weight)?;

    if !velocity.is_finite() || velocity < 0.0 {
        return Err(DomainError::BadVelocity(velocity));
    }

    let load_factor = profile.load_factor(velocity);
    if load_factor <= 0.0 {
        return Err(DomainError::VelocityTooHigh(velocity));
    }

    Ok((weight / load_factor).round())
}

/// Load as a whole percentage of 1RM.
pub fn relative_intensity(weight: f64, one_rm: f64) -> Result<f64, DomainError> {
    check_weight(weight)?;
    check_weight(one_rm)?;

    Ok((weight / one_rm * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rm_from_velocity() {
        // 1 - (0.77 x 0.04 + 2.07 x 0.2) = 0.5552, 100 / 0.5552 = 180.1
        assert_eq!(one_rm_from_velocity(100.0, 0.2, LoadProfile::Squat), Ok(180.0));
        // no velocity, the load is the max
        assert_eq!(one_rm_from_velocity(100.0, 0.0, LoadProfile::Bench), Ok(100.0));
    }

    #[test]
    fn test_one_rm_from_velocity_too_high() {
        assert_eq!(
            one_rm_from_velocity(100.0, 0.5, LoadProfile::Squat),
            Err(DomainError::VelocityTooHigh(0.5))
        );
    }

    #[test]
    fn test_one_rm_from_velocity_rejects_bad_input() {
        assert_eq!(
            one_rm_from_velocity(0.0, 0.2, LoadProfile::Squat),
            Err(DomainError::BadWeight(0.0))
        );
        assert_eq!(
            one_rm_from_velocity(100.0, -0.2, LoadProfile::Squat),
            Err(DomainError::BadVelocity(-0.2))
        );
        assert!(one_rm_from_velocity(100.0, f64::NAN, LoadProfile::Squat).is_err());
    }

    #[test]
    fn test_relative_intensity() {
        assert_eq!(relative_intensity(100.0, 180.0), Ok(56.0));
        assert_eq!(relative_intensity(100.0, 100.0), Ok(100.0));
        assert!(relative_intensity(100.0, 0.0).is_err());
    }

    #[test]
    fn test_profile_from_exercise() {
        assert_eq!(LoadProfile::from(VbtExercise::Deadlift), LoadProfile::Deadlift);
        assert_eq!(LoadProfile::from(VbtExercise::Clean), LoadProfile::Default);
        assert_eq!(LoadProfile::from(VbtExercise::OverheadPress), LoadProfile::Default);
    }
}
