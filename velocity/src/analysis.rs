//! Heuristic set analysis over a VBT history.
//!
//! A set is projected on two fixed "principal components" of
//! `[body weight, height, lifted weight, velocity]`, compared with past sets
//! to predict its share of 1RM, and replayed as a simulated 10 rep set to
//! score consistency and fatigue.
//!
//! With fewer than [`SPARSE_HISTORY_LEN`] past sets the analysis is jittered
//! by the injected random generator. With enough history every noise term
//! takes its expected value and the result is deterministic.

use std::array;
use std::ops::Range;

use rand::Rng;
use time::OffsetDateTime;

use crate::load::{LoadProfile, one_rm_from_velocity, relative_intensity};
use crate::zones::{VbtExercise, VelocityClass, classify_velocity};
use crate::{DomainError, check_weight};

/// History length from which the analysis stops being random.
pub const SPARSE_HISTORY_LEN: usize = 5;
/// History length from which features are centred on the history mean.
pub const CENTERED_HISTORY_LEN: usize = 3;
pub const SIMULATED_REPS: usize = 10;
/// Displacement in cm recorded when none was measured.
pub const DEFAULT_DISPLACEMENT: f64 = 60.0;

const FRESH_REPS: usize = 5;
const FATIGUE_PER_REP: f64 = 0.02;
const BASELINE_PERCENT: f64 = 70.0;
const PERCENT_RANGE: (f64, f64) = (50.0, 100.0);
const HIGH_CONFIDENCE_LEN: usize = 10;

const PC1: [f64; 4] = [0.3, 0.1, 0.4, 0.2];
const PC2: [f64; 4] = [0.1, 0.3, 0.2, 0.4];
const LOADING_JITTER: Range<f64> = 0.0..0.1;

/// Source of the additive noise terms of the analysis.
pub trait Noise {
    /// A value from `range`.
    fn sample(&mut self, range: Range<f64>) -> f64;
}

/// Every noise term at its expected value, the middle of its range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expected;

impl Noise for Expected {
    fn sample(&mut self, range: Range<f64>) -> f64 {
        (range.start + range.end) / 2.0
    }
}

/// Uniform noise from a random generator.
#[derive(Debug)]
pub struct Jitter<R>(pub R);

impl<R: Rng> Noise for Jitter<R> {
    fn sample(&mut self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }

        self.0.gen_range(range)
    }
}

/// One measured set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftSample {
    pub exercise: VbtExercise,
    /// Body weight in kg
    pub body_weight: f64,
    /// Height in cm
    pub height: f64,
    /// Lifted load in kg
    pub lifted_weight: f64,
    /// Mean concentric velocity in m/s
    pub avg_velocity: f64,
}

impl LiftSample {
    pub const DEFAULT_BODY_WEIGHT: f64 = 70.0;
    pub const DEFAULT_HEIGHT: f64 = 175.0;

    fn features(&self) -> [f64; 4] {
        [
            self.body_weight,
            self.height,
            self.lifted_weight,
            self.avg_velocity,
        ]
    }
}

/// A set kept in the VBT history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VbtEntry {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub sample: LiftSample,
    /// Bar displacement in cm
    pub displacement: f64,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub recorded_at: OffsetDateTime,
    pub zone: VelocityClass,
    /// `None` when the velocity is too fast for the load profile
    pub estimated_one_rm: Option<f64>,
    pub intensity: Option<f64>,
}

impl VbtEntry {
    /// Classify `sample` and estimate its 1RM for the history.
    pub fn record(sample: LiftSample, displacement: f64, recorded_at: OffsetDateTime) -> Self {
        let zone = classify_velocity(sample.avg_velocity, sample.exercise);
        let estimated_one_rm = one_rm_from_velocity(
            sample.lifted_weight,
            sample.avg_velocity,
            LoadProfile::from(sample.exercise),
        )
        .ok();
        let intensity = estimated_one_rm
            .and_then(|one_rm| relative_intensity(sample.lifted_weight, one_rm).ok());

        Self {
            sample,
            displacement,
            recorded_at,
            zone,
            estimated_one_rm,
            intensity,
        }
    }

    /// Share of 1RM the set's zone is trained at.
    fn target_percent(&self) -> f64 {
        self.zone
            .zone()
            .map_or(BASELINE_PERCENT, |zone| zone.load_percent().midpoint())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedRep {
    pub rep: u8,
    /// Velocity in m/s
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancedAnalysis {
    pub zone: VelocityClass,
    pub reps: Vec<SimulatedRep>,
    /// Standard deviation of the simulated speeds in m/s
    pub standard_deviation: f64,
    /// Second half speed change against the first half, in percent
    pub fatigue_trend: f64,
    pub fatigue: Level,
    pub consistency_score: f64,
    pub technical_efficiency: f64,
    pub one_rm_percentage: f64,
    pub predicted_max_weight: f64,
    pub principal_components: [f64; 2],
    pub confidence: Level,
    pub similar: Option<SimilarWorkouts>,
    /// Whether random jitter went into the result
    pub jittered: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarWorkouts {
    /// Mean velocity of the latest sets of the exercise, two decimals
    pub average_velocity: f64,
    /// Current velocity against that mean, in percent, one decimal
    pub progress_trend: f64,
    /// Up to three latest sets within 0.1 m/s of the current one
    pub similar: Vec<VbtEntry>,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn dot(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

fn principal_components(
    sample: &LiftSample,
    history: &[VbtEntry],
    noise: &mut dyn Noise,
) -> [f64; 2] {
    let features = sample.features();

    if history.len() < CENTERED_HISTORY_LEN {
        return [dot(&PC1, &features), dot(&PC2, &features)];
    }

    let n = history.len() as f64;
    let mut means = [0.0; 4];
    for entry in history {
        for (mean, feature) in means.iter_mut().zip(entry.sample.features()) {
            *mean += feature / n;
        }
    }

    let centered: [f64; 4] = array::from_fn(|i| features[i] - means[i]);
    let mut jittered = |loadings: [f64; 4]| loadings.map(|c| c + noise.sample(LOADING_JITTER));
    let pc1 = jittered(PC1);
    let pc2 = jittered(PC2);

    [dot(&pc1, &centered), dot(&pc2, &centered)]
}

/// Predicted share of 1RM, with the components it was predicted from.
fn predict_percent(
    sample: &LiftSample,
    history: &[VbtEntry],
    noise: &mut dyn Noise,
) -> (f64, [f64; 2]) {
    let components = principal_components(sample, history, noise);

    let prediction = if history.len() >= SPARSE_HISTORY_LEN {
        let mut weighted = 0.0;
        let mut total = 0.0;

        for entry in history {
            let other = principal_components(&entry.sample, history, noise);
            let similarity = 1.0
                / (1.0
                    + (components[0] - other[0]).abs()
                    + (components[1] - other[1]).abs());

            weighted += entry.target_percent() * similarity;
            total += similarity;
        }

        weighted / total + noise.sample(-2.5..2.5)
    } else {
        BASELINE_PERCENT + 0.7 * components[0] + 0.3 * components[1] + noise.sample(-2.0..2.0)
    };

    (prediction.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1), components)
}

/// Spread of the simulated speeds: the historical spread of the exercise
/// once it has enough sets, never under 5 % of the velocity.
fn speed_range(sample: &LiftSample, history: &[VbtEntry]) -> f64 {
    let speeds: Vec<f64> = history
        .iter()
        .filter(|entry| entry.sample.exercise == sample.exercise)
        .map(|entry| entry.sample.avg_velocity)
        .collect();

    if speeds.len() >= CENTERED_HISTORY_LEN {
        std_dev(&speeds).max(sample.avg_velocity * 0.05)
    } else {
        sample.avg_velocity * 0.15
    }
}

fn simulate_set(sample: &LiftSample, history: &[VbtEntry], noise: &mut dyn Noise) -> Vec<f64> {
    let range = speed_range(sample, history);

    (0..SIMULATED_REPS)
        .map(|rep| {
            let fatigue = if rep < FRESH_REPS {
                1.0
            } else {
                1.0 - (rep + 1 - FRESH_REPS) as f64 * FATIGUE_PER_REP
            };

            sample.avg_velocity * fatigue + noise.sample(-range..range)
        })
        .collect()
}

/// Analyse a set against the history.
///
/// `rng` is only drawn from while the history is shorter than
/// [`SPARSE_HISTORY_LEN`].
pub fn advanced_analysis<R: Rng>(
    sample: &LiftSample,
    history: &[VbtEntry],
    rng: &mut R,
) -> Result<AdvancedAnalysis, DomainError> {
    check_weight(sample.lifted_weight)?;
    if !sample.avg_velocity.is_finite() || sample.avg_velocity <= 0.0 {
        return Err(DomainError::BadVelocity(sample.avg_velocity));
    }

    let jittered = history.len() < SPARSE_HISTORY_LEN;
    let mut jitter = Jitter(rng);
    let mut expected = Expected;
    let noise: &mut dyn Noise = if jittered {
        &mut jitter
    } else {
        &mut expected
    };

    let speeds = simulate_set(sample, history, noise);
    let standard_deviation = std_dev(&speeds);
    let (first, second) = speeds.split_at(FRESH_REPS);
    let fatigue_trend = (mean(second) - mean(first)) / mean(first) * 100.0;
    let fatigue = if fatigue_trend < -5.0 {
        Level::High
    } else if fatigue_trend < -2.0 {
        Level::Medium
    } else {
        Level::Low
    };

    let (percent, principal_components) = predict_percent(sample, history, noise);

    let consistency_score = 100.0 - standard_deviation / sample.avg_velocity * 100.0;
    let mut technical_efficiency = 85.0 + noise.sample(0.0..15.0);
    if consistency_score > 90.0 {
        technical_efficiency = (technical_efficiency + 5.0).min(100.0);
    } else if consistency_score < 70.0 {
        technical_efficiency = (technical_efficiency - 10.0).max(70.0);
    }

    let confidence = if history.len() >= HIGH_CONFIDENCE_LEN {
        Level::High
    } else if history.len() >= SPARSE_HISTORY_LEN {
        Level::Medium
    } else {
        Level::Low
    };

    let reps = speeds
        .iter()
        .zip(1..)
        .map(|(&speed, rep)| SimulatedRep { rep, speed })
        .collect();

    Ok(AdvancedAnalysis {
        zone: classify_velocity(sample.avg_velocity, sample.exercise),
        reps,
        standard_deviation,
        fatigue_trend,
        fatigue,
        consistency_score,
        technical_efficiency: round_to(technical_efficiency, 1),
        one_rm_percentage: round_to(percent, 1),
        predicted_max_weight: round_to(sample.lifted_weight / percent * 100.0, 1),
        principal_components,
        confidence,
        similar: similar_workouts(sample, history),
        jittered,
    })
}

/// Compare a set with the latest sets of the same exercise.
///
/// `None` with fewer than three sets in the history or fewer than two of
/// the same exercise.
pub fn similar_workouts(sample: &LiftSample, history: &[VbtEntry]) -> Option<SimilarWorkouts> {
    if history.len() < CENTERED_HISTORY_LEN {
        return None;
    }

    let mut same: Vec<&VbtEntry> = history
        .iter()
        .filter(|entry| entry.sample.exercise == sample.exercise)
        .collect();
    if same.len() < 2 {
        return None;
    }
    same.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let recent: Vec<f64> = same
        .iter()
        .take(SPARSE_HISTORY_LEN)
        .map(|entry| entry.sample.avg_velocity)
        .collect();
    let average = mean(&recent);

    let similar = same
        .into_iter()
        .filter(|entry| (entry.sample.avg_velocity - sample.avg_velocity).abs() < 0.1)
        .take(3)
        .cloned()
        .collect();

    Some(SimilarWorkouts {
        average_velocity: round_to(average, 2),
        progress_trend: round_to((sample.avg_velocity - average) / average * 100.0, 1),
        similar,
    })
}
