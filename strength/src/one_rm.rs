//! Estimated one-repetition maximum.
//!
//! Formulas:
//!
//! ```notrust
//! Brzycki   = w * 36 / (37 - r)
//! Epley     = w * (1 + r / 30)
//! McGlothin = 100 * w / (101.3 - 2.67123 * r)
//! Lombardi  = w * r ^ 0.1
//! ```
//!
//! Where:
//!
//! - w - weight lifted in kilograms
//! - r - repetitions performed
//!
//! The blended estimate is the arithmetic mean of all four, adjusted as
//! `blended * exercise * sex * age`. The multiplication order is kept as is:
//! pull-ups recombine body weight before the exercise factor is applied.

use crate::DomainError;

/// Highest repetition count accepted by [`brzycki`] and therefore by [`blended`].
pub const MAX_REPS: u32 = 36;

/// Rows of the N-rep table produced by [`rep_max_table`].
pub const REP_TABLE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const fn factor(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Exercise {
    #[default]
    General,
    Squat,
    HighBarSquat,
    LowBarSquat,
    Deadlift,
    SumoDeadlift,
    BenchPress,
    ShoulderPress,
    Row,
    /// Load is the additional weight on top of body weight.
    PullUp,
}

impl Exercise {
    pub const ALL: [Exercise; 10] = [
        Exercise::General,
        Exercise::Squat,
        Exercise::HighBarSquat,
        Exercise::LowBarSquat,
        Exercise::Deadlift,
        Exercise::SumoDeadlift,
        Exercise::BenchPress,
        Exercise::ShoulderPress,
        Exercise::Row,
        Exercise::PullUp,
    ];

    pub const fn factor(self) -> f64 {
        match self {
            Exercise::General => 1.0,
            Exercise::Squat => 0.98,
            Exercise::HighBarSquat => 0.97,
            Exercise::LowBarSquat => 0.99,
            Exercise::Deadlift => 1.03,
            Exercise::SumoDeadlift => 1.02,
            Exercise::BenchPress => 1.0,
            Exercise::ShoulderPress => 0.96,
            Exercise::Row => 0.95,
            Exercise::PullUp => 0.95,
        }
    }

    /// Stable identifier, also used as the localization key.
    pub const fn id(self) -> &'static str {
        match self {
            Exercise::General => "general",
            Exercise::Squat => "squat",
            Exercise::HighBarSquat => "high_bar_squat",
            Exercise::LowBarSquat => "low_bar_squat",
            Exercise::Deadlift => "deadlift",
            Exercise::SumoDeadlift => "sumo_deadlift",
            Exercise::BenchPress => "bench_press",
            Exercise::ShoulderPress => "shoulder_press",
            Exercise::Row => "row",
            Exercise::PullUp => "pull_up",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }
}

/// Age adjustment. Unknown age is not adjusted.
pub const fn age_factor(age: Option<u32>) -> f64 {
    match age {
        Some(age) if age < 20 => 0.9,
        Some(age) if age > 50 => 0.8,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lifter {
    pub sex: Sex,
    /// Age in years
    pub age: Option<u32>,
}

/// Single performed set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftSet {
    pub exercise: Exercise,
    /// Weight lifted in kilograms. For [`Exercise::PullUp`] this is the
    /// additional weight and may be zero.
    pub weight: f64,
    pub reps: u32,
    /// Body weight in kilograms, required for [`Exercise::PullUp`].
    pub body_weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepMax {
    pub reps: u32,
    pub weight: f64,
}

fn check_weight(weight: f64) -> Result<(), DomainError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(DomainError::BadWeight(weight));
    }

    Ok(())
}

fn check_reps(reps: u32) -> Result<(), DomainError> {
    if reps == 0 {
        return Err(DomainError::BadReps(reps));
    }

    Ok(())
}

pub fn brzycki(weight: f64, reps: u32) -> Result<f64, DomainError> {
    check_weight(weight)?;
    check_reps(reps)?;

    if reps > MAX_REPS {
        return Err(DomainError::TooManyReps(reps));
    }

    Ok(weight * 36.0 / (37.0 - reps as f64))
}

pub fn epley(weight: f64, reps: u32) -> Result<f64, DomainError> {
    check_weight(weight)?;
    check_reps(reps)?;

    Ok(weight * (1.0 + reps as f64 / 30.0))
}

pub fn mcglothin(weight: f64, reps: u32) -> Result<f64, DomainError> {
    check_weight(weight)?;
    check_reps(reps)?;

    let denominator = 101.3 - 2.67123 * reps as f64;
    if denominator <= 0.0 {
        return Err(DomainError::NonPositiveDenominator(reps));
    }

    Ok(100.0 * weight / denominator)
}

pub fn lombardi(weight: f64, reps: u32) -> Result<f64, DomainError> {
    check_weight(weight)?;
    check_reps(reps)?;

    Ok(weight * (reps as f64).powf(0.1))
}

/// Arithmetic mean of the four estimators.
pub fn blended(weight: f64, reps: u32) -> Result<f64, DomainError> {
    let estimates = [
        brzycki(weight, reps)?,
        epley(weight, reps)?,
        mcglothin(weight, reps)?,
        lombardi(weight, reps)?,
    ];

    Ok(estimates.iter().sum::<f64>() / estimates.len() as f64)
}

/// Blended 1RM adjusted for the exercise and the lifter.
///
/// For pull-ups with additional weight the result is the additional load
/// the lifter could move for one repetition, i.e. body weight is recombined
/// with the load before adjusting and subtracted afterwards. Without
/// additional weight the result is the adjusted body weight capacity.
///
/// The pull-up load is not clamped: when the combined factors shrink the
/// recombined load below body weight, e.g. a female lifter over 50, the
/// result is negative.
pub fn adjusted(set: &LiftSet, lifter: &Lifter) -> Result<f64, DomainError> {
    let LiftSet {
        exercise,
        weight,
        reps,
        body_weight,
    } = *set;

    let adjust =
        |raw: f64| raw * exercise.factor() * lifter.sex.factor() * age_factor(lifter.age);

    match exercise {
        Exercise::PullUp => {
            let body_weight = body_weight.ok_or(DomainError::BodyWeightRequired)?;
            check_weight(body_weight)?;

            if !weight.is_finite() || weight < 0.0 {
                return Err(DomainError::BadWeight(weight));
            }

            if weight > 0.0 {
                Ok(adjust(blended(body_weight + weight, reps)?) - body_weight)
            } else {
                Ok(adjust(blended(body_weight, reps)?))
            }
        }
        _ => Ok(adjust(blended(weight, reps)?)),
    }
}

/// 1RM through 10RM. The first row is the rounded 1RM itself, the others
/// are derived with inverse Epley.
pub fn rep_max_table(one_rm: f64) -> Vec<RepMax> {
    (1..=REP_TABLE_SIZE)
        .map(|reps| {
            let weight = match reps {
                1 => one_rm.round(),
                _ => (one_rm / (1.0 + reps as f64 / 30.0)).round(),
            };

            RepMax { reps, weight }
        })
        .collect()
}
