//! Input to metric for every calculator. Pure and deterministic.

use heart_rate::MaxHeartRateFormula;
use strength::{one_rm, rpe};
use velocity::{LoadProfile, classify_velocity, load};

use crate::{Calculator, EstimatedMetric, EstimationError, MeasurementInput, Outcome};

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Validate `input` and run its calculator.
pub fn compute(
    input: &MeasurementInput,
    max_hr_formula: MaxHeartRateFormula,
) -> Result<Outcome, EstimationError> {
    input.validate()?;

    let metric = match *input {
        MeasurementInput::OneRepMax { set, lifter } => {
            let one_rm = one_rm::adjusted(&set, &lifter)?;

            EstimatedMetric::OneRepMax {
                one_rm,
                table: one_rm::rep_max_table(one_rm),
            }
        }
        MeasurementInput::RpeToLoad { rpe, reps, weight } => {
            let Some(percent) = rpe::percent_of_one_rm(rpe, reps) else {
                return Ok(Outcome::Unclassified {
                    calculator: Calculator::RpeToLoad,
                });
            };

            EstimatedMetric::RpeLoad {
                percent,
                estimated_one_rm: round_one_decimal(rpe::one_rm_from_percent(weight, percent)),
            }
        }
        MeasurementInput::PercentToRpe { percent, reps } => {
            let Some(rpe) = rpe::rpe_for_percent(percent, reps) else {
                return Ok(Outcome::Unclassified {
                    calculator: Calculator::PercentToRpe,
                });
            };

            EstimatedMetric::Rpe { rpe }
        }
        MeasurementInput::VelocityLoad {
            exercise,
            velocity,
            weight,
        } => {
            let zone = classify_velocity(velocity, exercise);

            let one_rm = match weight {
                Some(weight) => {
                    match load::one_rm_from_velocity(weight, velocity, LoadProfile::from(exercise)) {
                        Ok(one_rm) => Some(one_rm),
                        Err(velocity::DomainError::VelocityTooHigh(_)) => None,
                        Err(err) => return Err(err.into()),
                    }
                }
                None => None,
            };
            let intensity = match (weight, one_rm) {
                (Some(weight), Some(one_rm)) => Some(load::relative_intensity(weight, one_rm)?),
                _ => None,
            };

            EstimatedMetric::VelocityLoad {
                exercise,
                zone,
                one_rm,
                intensity,
            }
        }
        MeasurementInput::Vo2Max { max_hr, resting_hr } => EstimatedMetric::Vo2Max {
            vo2_max: heart_rate::vo2_max(max_hr, resting_hr)?,
        },
        MeasurementInput::HeartRateZones { max_hr, resting_hr } => {
            EstimatedMetric::HeartRateZones {
                zones: heart_rate::reserve_zones(max_hr, resting_hr)?,
            }
        }
        MeasurementInput::MacrosToCalories { protein, carbs, fat } => EstimatedMetric::Calories {
            kcal: round_one_decimal(nutrition::macros_to_calories(protein, carbs, fat)?),
        },
        MeasurementInput::CaloriesToMacros { kcal } => EstimatedMetric::Macros {
            macros: nutrition::calories_to_macros(kcal)?,
        },
        MeasurementInput::FoodNutrients { food, grams } => EstimatedMetric::FoodNutrients {
            food,
            grams,
            nutrients: nutrition::food_nutrients(food, grams)?,
        },
        MeasurementInput::EstimatedMaxHeartRate { age } => EstimatedMetric::MaxHeartRate {
            bpm: heart_rate::mhr(age, max_hr_formula)?,
            formula: max_hr_formula,
        },
    };

    Ok(Outcome::Classified(metric))
}
