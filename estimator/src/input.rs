use nutrition::Food;
use strength::{Exercise, LiftSet, Lifter, Sex};
use velocity::VbtExercise;

use crate::{Fields, ValidationError};

/// RPE accepted by the RPE calculator.
pub const RPE_RANGE: (f64, f64) = (6.0, 10.0);
/// Repetitions accepted by both RPE calculators.
pub const RPE_REPS_RANGE: (u32, u32) = (1, 10);
/// %1RM accepted by the percentage calculator.
pub const PERCENT_RANGE: (f64, f64) = (40.0, 100.0);
/// Portion used when no food weight is given.
pub const DEFAULT_FOOD_GRAMS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    OneRepMax,
    RpeToLoad,
    PercentToRpe,
    VelocityLoad,
    Vo2Max,
    HeartRateZones,
    MacrosToCalories,
    CaloriesToMacros,
    FoodNutrients,
    EstimatedMaxHeartRate,
}

impl Calculator {
    pub const ALL: [Calculator; 10] = [
        Calculator::OneRepMax,
        Calculator::RpeToLoad,
        Calculator::PercentToRpe,
        Calculator::VelocityLoad,
        Calculator::Vo2Max,
        Calculator::HeartRateZones,
        Calculator::MacrosToCalories,
        Calculator::CaloriesToMacros,
        Calculator::FoodNutrients,
        Calculator::EstimatedMaxHeartRate,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Calculator::OneRepMax => "one_rep_max",
            Calculator::RpeToLoad => "rpe_to_load",
            Calculator::PercentToRpe => "percent_to_rpe",
            Calculator::VelocityLoad => "velocity_load",
            Calculator::Vo2Max => "vo2_max",
            Calculator::HeartRateZones => "heart_rate_zones",
            Calculator::MacrosToCalories => "macros_to_calories",
            Calculator::CaloriesToMacros => "calories_to_macros",
            Calculator::FoodNutrients => "food_nutrients",
            Calculator::EstimatedMaxHeartRate => "estimated_max_heart_rate",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }
}

/// Typed fields of one calculator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum MeasurementInput {
    OneRepMax {
        set: LiftSet,
        lifter: Lifter,
    },
    RpeToLoad {
        rpe: f64,
        reps: u32,
        weight: f64,
    },
    PercentToRpe {
        percent: f64,
        reps: u32,
    },
    VelocityLoad {
        exercise: VbtExercise,
        /// Mean concentric velocity in m/s
        velocity: f64,
        /// Lifted load in kg, needed for the 1RM estimate
        weight: Option<f64>,
    },
    Vo2Max {
        max_hr: f64,
        resting_hr: f64,
    },
    HeartRateZones {
        max_hr: f64,
        resting_hr: f64,
    },
    MacrosToCalories {
        protein: f64,
        carbs: f64,
        fat: f64,
    },
    CaloriesToMacros {
        kcal: f64,
    },
    FoodNutrients {
        food: Food,
        grams: f64,
    },
    EstimatedMaxHeartRate {
        age: u8,
    },
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }

    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(())
}

fn within(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Ok(())
}

fn within_reps(reps: u32) -> Result<(), ValidationError> {
    let (min, max) = RPE_REPS_RANGE;
    within("reps", f64::from(reps), (f64::from(min), f64::from(max)))
}

impl MeasurementInput {
    pub const fn calculator(&self) -> Calculator {
        match self {
            MeasurementInput::OneRepMax { .. } => Calculator::OneRepMax,
            MeasurementInput::RpeToLoad { .. } => Calculator::RpeToLoad,
            MeasurementInput::PercentToRpe { .. } => Calculator::PercentToRpe,
            MeasurementInput::VelocityLoad { .. } => Calculator::VelocityLoad,
            MeasurementInput::Vo2Max { .. } => Calculator::Vo2Max,
            MeasurementInput::HeartRateZones { .. } => Calculator::HeartRateZones,
            MeasurementInput::MacrosToCalories { .. } => Calculator::MacrosToCalories,
            MeasurementInput::CaloriesToMacros { .. } => Calculator::CaloriesToMacros,
            MeasurementInput::FoodNutrients { .. } => Calculator::FoodNutrients,
            MeasurementInput::EstimatedMaxHeartRate { .. } => Calculator::EstimatedMaxHeartRate,
        }
    }

    /// Check the ranges the calculator accepts.
    ///
    /// Numbers a formula cannot handle, like 40 reps for a 1RM, pass here
    /// and fail later as a domain error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            MeasurementInput::OneRepMax { set, lifter } => {
                finite("weight", set.weight)?;
                if let Some(body_weight) = set.body_weight {
                    positive("body_weight", body_weight)?;
                }
                if let Some(age) = lifter.age {
                    positive("age", f64::from(age))?;
                }
                Ok(())
            }
            MeasurementInput::RpeToLoad { rpe, reps, weight } => {
                within("rpe", rpe, RPE_RANGE)?;
                within_reps(reps)?;
                positive("weight", weight)
            }
            MeasurementInput::PercentToRpe { percent, reps } => {
                within("percent", percent, PERCENT_RANGE)?;
                within_reps(reps)
            }
            MeasurementInput::VelocityLoad {
                velocity, weight, ..
            } => match weight {
                Some(weight) => {
                    positive("velocity", velocity)?;
                    positive("weight", weight)
                }
                None => finite("velocity", velocity),
            },
            MeasurementInput::Vo2Max { max_hr, resting_hr }
            | MeasurementInput::HeartRateZones { max_hr, resting_hr } => {
                positive("max_hr", max_hr)?;
                positive("resting_hr", resting_hr)
            }
            MeasurementInput::MacrosToCalories { protein, carbs, fat } => {
                finite("protein", protein)?;
                finite("carbs", carbs)?;
                finite("fat", fat)
            }
            MeasurementInput::CaloriesToMacros { kcal } => positive("kcal", kcal),
            MeasurementInput::FoodNutrients { grams, .. } => positive("grams", grams),
            MeasurementInput::EstimatedMaxHeartRate { age } => {
                positive("age", f64::from(age))
            }
        }
    }

    /// Build the input of `calculator` from text fields.
    ///
    /// Field names are the snake case names of the typed fields; the 1RM
    /// calculator also reads `exercise`, `sex` and `age`.
    pub fn parse(calculator: Calculator, fields: &Fields) -> Result<Self, ValidationError> {
        let input = match calculator {
            Calculator::OneRepMax => {
                let exercise = fields
                    .choice("exercise", Exercise::from_id)?
                    .unwrap_or_default();
                let sex = fields
                    .choice("sex", |id| match id {
                        "male" => Some(Sex::Male),
                        "female" => Some(Sex::Female),
                        _ => None,
                    })?
                    .unwrap_or_default();
                // additional weight of a pull-up may be left blank
                let weight = match exercise {
                    Exercise::PullUp => fields.optional_number("weight")?.unwrap_or(0.0),
                    _ => fields.number("weight")?,
                };

                MeasurementInput::OneRepMax {
                    set: LiftSet {
                        exercise,
                        weight,
                        reps: fields.count("reps")?,
                        body_weight: fields.optional_number("body_weight")?,
                    },
                    lifter: Lifter {
                        sex,
                        age: fields.optional_count("age")?,
                    },
                }
            }
            Calculator::RpeToLoad => MeasurementInput::RpeToLoad {
                rpe: fields.number("rpe")?,
                reps: fields.count("reps")?,
                weight: fields.number("weight")?,
            },
            Calculator::PercentToRpe => MeasurementInput::PercentToRpe {
                percent: fields.number("percent")?,
                reps: fields.count("reps")?,
            },
            Calculator::VelocityLoad => MeasurementInput::VelocityLoad {
                exercise: fields
                    .choice("exercise", VbtExercise::from_id)?
                    .ok_or(ValidationError::Missing("exercise"))?,
                velocity: fields.number("velocity")?,
                weight: fields.optional_number("weight")?,
            },
            Calculator::Vo2Max => MeasurementInput::Vo2Max {
                max_hr: fields.number("max_hr")?,
                resting_hr: fields.number("resting_hr")?,
            },
            Calculator::HeartRateZones => MeasurementInput::HeartRateZones {
                max_hr: fields.number("max_hr")?,
                resting_hr: fields.number("resting_hr")?,
            },
            Calculator::MacrosToCalories => MeasurementInput::MacrosToCalories {
                protein: fields.optional_number("protein")?.unwrap_or(0.0),
                carbs: fields.optional_number("carbs")?.unwrap_or(0.0),
                fat: fields.optional_number("fat")?.unwrap_or(0.0),
            },
            Calculator::CaloriesToMacros => MeasurementInput::CaloriesToMacros {
                kcal: fields.number("kcal")?,
            },
            Calculator::FoodNutrients => MeasurementInput::FoodNutrients {
                food: fields
                    .choice("food", Food::from_id)?
                    .ok_or(ValidationError::Missing("food"))?,
                grams: fields
                    .optional_number("grams")?
                    .unwrap_or(DEFAULT_FOOD_GRAMS),
            },
            Calculator::EstimatedMaxHeartRate => {
                let age: u32 = fields.count("age")?;
                let age = u8::try_from(age).map_err(|_| ValidationError::OutOfRange {
                    field: "age",
                    value: f64::from(age),
                    min: 1.0,
                    max: f64::from(u8::MAX),
                })?;

                MeasurementInput::EstimatedMaxHeartRate { age }
            }
        };

        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_rep_max() {
        let fields = Fields::new()
            .with("weight", "100")
            .with("reps", "5")
            .with("exercise", "squat")
            .with("sex", "female")
            .with("age", "25");

        let input = MeasurementInput::parse(Calculator::OneRepMax, &fields).unwrap();

        assert_eq!(
            input,
            MeasurementInput::OneRepMax {
                set: LiftSet {
                    exercise: Exercise::Squat,
                    weight: 100.0,
                    reps: 5,
                    body_weight: None,
                },
                lifter: Lifter {
                    sex: Sex::Female,
                    age: Some(25),
                },
            }
        );
    }

    #[test]
    fn test_one_rep_max_rejects_age_zero() {
        let fields = Fields::new()
            .with("weight", "100")
            .with("reps", "5")
            .with("age", "0");

        assert_eq!(
            MeasurementInput::parse(Calculator::OneRepMax, &fields),
            Err(ValidationError::NotPositive {
                field: "age",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_max_heart_rate_age_out_of_range() {
        let parse = |age: &str| {
            MeasurementInput::parse(
                Calculator::EstimatedMaxHeartRate,
                &Fields::new().with("age", age),
            )
        };

        assert_eq!(
            parse("300"),
            Err(ValidationError::OutOfRange {
                field: "age",
                value: 300.0,
                min: 1.0,
                max: 255.0
            })
        );
        assert!(matches!(
            parse("30.5"),
            Err(ValidationError::NotAWholeNumber { field: "age", .. })
        ));
        assert_eq!(
            parse("30"),
            Ok(MeasurementInput::EstimatedMaxHeartRate { age: 30 })
        );
    }

    #[test]
    fn test_parse_pull_up_without_added_weight() {
        let fields = Fields::new()
            .with("reps", "8")
            .with("exercise", "pull_up")
            .with("body_weight", "75");

        let input = MeasurementInput::parse(Calculator::OneRepMax, &fields).unwrap();
        let MeasurementInput::OneRepMax { set, .. } = input else {
            panic!("expected a 1RM input");
        };

        assert_eq!(set.weight, 0.0);
        assert_eq!(set.body_weight, Some(75.0));
    }

    #[test]
    fn test_parse_reports_missing_and_bad_fields() {
        assert_eq!(
            MeasurementInput::parse(Calculator::Vo2Max, &Fields::new().with("max_hr", "190")),
            Err(ValidationError::Missing("resting_hr"))
        );
        assert!(matches!(
            MeasurementInput::parse(
                Calculator::CaloriesToMacros,
                &Fields::new().with("kcal", "lots")
            ),
            Err(ValidationError::NotANumber { field: "kcal", .. })
        ));
        assert!(matches!(
            MeasurementInput::parse(
                Calculator::FoodNutrients,
                &Fields::new().with("food", "pizza")
            ),
            Err(ValidationError::Unknown { .. })
        ));
    }

    #[test]
    fn test_rpe_ranges() {
        let input = MeasurementInput::RpeToLoad {
            rpe: 5.5,
            reps: 3,
            weight: 100.0,
        };
        assert_eq!(
            input.validate(),
            Err(ValidationError::OutOfRange {
                field: "rpe",
                value: 5.5,
                min: 6.0,
                max: 10.0
            })
        );

        let input = MeasurementInput::PercentToRpe {
            percent: 80.0,
            reps: 12,
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::OutOfRange { field: "reps", .. })
        ));

        let input = MeasurementInput::PercentToRpe {
            percent: 39.0,
            reps: 3,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_velocity_validation() {
        // classification alone takes any finite velocity
        let classify_only = MeasurementInput::VelocityLoad {
            exercise: VbtExercise::Squat,
            velocity: -0.1,
            weight: None,
        };
        assert_eq!(classify_only.validate(), Ok(()));

        let with_load = MeasurementInput::VelocityLoad {
            exercise: VbtExercise::Squat,
            velocity: 0.0,
            weight: Some(100.0),
        };
        assert_eq!(
            with_load.validate(),
            Err(ValidationError::NotPositive {
                field: "velocity",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_food_weight_defaults_to_100g() {
        let input =
            MeasurementInput::parse(Calculator::FoodNutrients, &Fields::new().with("food", "egg"))
                .unwrap();

        assert_eq!(
            input,
            MeasurementInput::FoodNutrients {
                food: Food::Egg,
                grams: 100.0
            }
        );
    }

    #[test]
    fn test_calculator_ids_round_trip() {
        for calculator in Calculator::ALL {
            assert_eq!(Calculator::from_id(calculator.id()), Some(calculator));
        }
    }
}
