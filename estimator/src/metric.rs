use heart_rate::{MaxHeartRateFormula, ZoneBand};
use nutrition::{Food, FoodNutrients, Macros};
use strength::RepMax;
use velocity::{VbtExercise, VelocityClass};

use crate::Calculator;

/// Output of a calculator. Never changed once produced.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatedMetric {
    OneRepMax {
        /// Adjusted estimate in kg
        one_rm: f64,
        /// Rounded loads for 1 to 10 reps
        table: Vec<RepMax>,
    },
    RpeLoad {
        percent: f64,
        /// 1RM in kg, one decimal
        estimated_one_rm: f64,
    },
    Rpe {
        rpe: f64,
    },
    VelocityLoad {
        exercise: VbtExercise,
        zone: VelocityClass,
        /// `None` without a load or when the velocity leaves no load factor
        one_rm: Option<f64>,
        intensity: Option<f64>,
    },
    Vo2Max {
        /// ml/kg/min
        vo2_max: f64,
    },
    HeartRateZones {
        zones: Vec<ZoneBand>,
    },
    Calories {
        kcal: f64,
    },
    Macros {
        macros: Macros,
    },
    FoodNutrients {
        food: Food,
        grams: f64,
        nutrients: FoodNutrients,
    },
    MaxHeartRate {
        bpm: f64,
        formula: MaxHeartRateFormula,
    },
}

/// Result of a successful computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Classified(EstimatedMetric),
    /// Valid input whose combination the lookup table does not cover.
    Unclassified { calculator: Calculator },
}

impl Outcome {
    pub fn metric(&self) -> Option<&EstimatedMetric> {
        match self {
            Outcome::Classified(metric) => Some(metric),
            Outcome::Unclassified { .. } => None,
        }
    }

    pub fn into_metric(self) -> Option<EstimatedMetric> {
        match self {
            Outcome::Classified(metric) => Some(metric),
            Outcome::Unclassified { .. } => None,
        }
    }
}
